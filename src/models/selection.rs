use serde::Serialize;

use crate::estimator::constants::DEFAULT_MINUTES;

/// The user's choice for one activity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Selection {
    pub checked: bool,
    pub minutes: f64,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            checked: false,
            minutes: DEFAULT_MINUTES,
        }
    }
}

impl Selection {
    pub fn checked(minutes: f64) -> Self {
        Self {
            checked: true,
            minutes,
        }
    }
}
