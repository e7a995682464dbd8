//! Activity grid for the last twelve weeks.

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use crate::analytics::session::{get_session_stats, session_intensity};
use crate::model::WorkoutSession;
use crate::validate::format_date;

/// Weeks shown in the grid.
pub const HEATMAP_WEEKS: usize = 12;
/// Days back from today at which the grid starts (before aligning to Sunday).
pub const HEATMAP_LOOKBACK_DAYS: u64 = 83;

/// One cell of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatmapDay {
    /// `YYYY-MM-DD`
    pub date: String,
    /// 0 (no session) through 4
    pub intensity: u8,
    /// Day is after `today`
    pub future: bool,
}

/// Sunday through Saturday.
pub type HeatmapWeek = Vec<HeatmapDay>;

/// Build the grid ending around `today`.
///
/// The first week starts on the Sunday on or before `today - 83 days` and the
/// grid covers 84 days from there, so it ends on the Saturday on or before
/// `today`. Any day after `today` is flagged `future`.
#[must_use]
pub fn activity_heatmap(sessions: &[WorkoutSession], today: NaiveDate) -> Vec<HeatmapWeek> {
    let start = today
        .checked_sub_days(Days::new(HEATMAP_LOOKBACK_DAYS))
        .unwrap_or(today);
    let offset = u64::from(start.weekday().num_days_from_sunday());
    let week_start = start.checked_sub_days(Days::new(offset)).unwrap_or(start);

    week_start
        .iter_days()
        .take(HEATMAP_WEEKS * 7)
        .map(|date| {
            let key = format_date(date);
            let intensity = sessions
                .iter()
                .find(|s| s.date == key)
                .map_or(0, |s| session_intensity(&get_session_stats(s)));
            HeatmapDay {
                date: key,
                intensity,
                future: date > today,
            }
        })
        .collect::<Vec<_>>()
        .chunks(7)
        .map(<[HeatmapDay]>::to_vec)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Exercise, WorkoutSet};
    use crate::validate::parse_date;

    fn cell<'a>(weeks: &'a [HeatmapWeek], date: &str) -> Option<&'a HeatmapDay> {
        weeks.iter().flatten().find(|d| d.date == date)
    }

    #[test]
    fn test_grid_shape_and_alignment() {
        // Wednesday; 83 days back is Thursday 2023-10-26
        let today = parse_date("2024-01-17").unwrap();
        let weeks = activity_heatmap(&[], today);

        assert_eq!(weeks.len(), 12);
        assert!(weeks.iter().all(|w| w.len() == 7));
        assert_eq!(weeks[0][0].date, "2023-10-22");
        assert_eq!(weeks[11][6].date, "2024-01-13");
        assert!(weeks.iter().flatten().all(|d| d.intensity == 0 && !d.future));
    }

    #[test]
    fn test_grid_ends_today_on_saturday() {
        let today = parse_date("2024-01-20").unwrap();
        let weeks = activity_heatmap(&[], today);

        assert_eq!(weeks[0][0].date, "2023-10-29");
        assert_eq!(weeks[11][6].date, "2024-01-20");
        assert!(!weeks[11][6].future);
    }

    #[test]
    fn test_intensity_from_first_session() {
        let today = parse_date("2024-01-20").unwrap();
        let busy = WorkoutSession::with_exercises(
            "2024-01-15",
            vec![Exercise::with_sets("Rows", vec![WorkoutSet::bodyweight(10); 20])],
        );
        let light = WorkoutSession::with_exercises(
            "2024-01-15",
            vec![Exercise::with_sets("Rows", vec![WorkoutSet::bodyweight(10)])],
        );
        let other = WorkoutSession::with_exercises("2024-01-16", vec![]);

        let weeks = activity_heatmap(&[busy, light, other], today);

        assert_eq!(cell(&weeks, "2024-01-15").unwrap().intensity, 4);
        assert_eq!(cell(&weeks, "2024-01-16").unwrap().intensity, 1);
        assert_eq!(cell(&weeks, "2024-01-14").unwrap().intensity, 0);
    }

    #[test]
    fn test_sessions_outside_window_ignored() {
        let today = parse_date("2024-01-20").unwrap();
        let old = WorkoutSession::with_exercises(
            "2023-01-01",
            vec![Exercise::with_sets("Rows", vec![WorkoutSet::bodyweight(10)])],
        );
        let weeks = activity_heatmap(&[old], today);
        assert!(cell(&weeks, "2023-01-01").is_none());
        assert!(weeks.iter().flatten().all(|d| d.intensity == 0));
    }
}
