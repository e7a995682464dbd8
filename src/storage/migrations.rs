//! Schema-version upgrades for loaded blobs.
//!
//! Every blob carries a `version`. Blobs written before versioning existed
//! deserialize with version 0 and are stamped with the current version; the
//! layout has not changed since. Blobs from a newer release are used as-is.

use tracing::{info, warn};

use crate::model::{CURRENT_VERSION, WorkoutData};

/// Bring a loaded blob up to [`CURRENT_VERSION`].
#[must_use]
pub fn migrate(mut data: WorkoutData) -> WorkoutData {
    match data.version {
        0 => {
            info!(to = CURRENT_VERSION, "Stamping unversioned workout data");
            data.version = CURRENT_VERSION;
        }
        v if v > CURRENT_VERSION => {
            warn!(
                found = v,
                supported = CURRENT_VERSION,
                "Workout data was written by a newer version; reading it as-is"
            );
        }
        _ => {}
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unversioned_is_stamped() {
        let data = WorkoutData {
            sessions: Vec::new(),
            version: 0,
        };
        assert_eq!(migrate(data).version, CURRENT_VERSION);
    }

    #[test]
    fn test_newer_version_kept() {
        let data = WorkoutData {
            sessions: Vec::new(),
            version: CURRENT_VERSION + 1,
        };
        assert_eq!(migrate(data).version, CURRENT_VERSION + 1);
    }
}
