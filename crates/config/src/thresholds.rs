#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

/// Exit velocity cut-offs used to grade in-play contact. **Measured in mph**.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Thresholds {
    /// Balls put in play strictly below this speed count as weak contact.
    pub weak_contact: f64,

    /// Balls put in play at or above this speed count as hard contact. The
    /// bound is inclusive.
    pub hard_contact: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            weak_contact: 70.0,
            hard_contact: 95.0,
        }
    }
}

impl Thresholds {
    /// Both bounds are finite and weak does not exceed hard.
    pub fn is_valid(&self) -> bool {
        self.weak_contact.is_finite()
            && self.hard_contact.is_finite()
            && self.weak_contact <= self.hard_contact
    }
}
