#![forbid(unsafe_code)]

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Category a raw pitch call resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Foul,
    InPlay,
    Whiff,
    CalledStrike,
    Ball,
    HitByPitch,
    Undefined,
    Unknown,
}

impl EventCategory {
    pub const ALL: [EventCategory; 8] = [
        EventCategory::Foul,
        EventCategory::InPlay,
        EventCategory::Whiff,
        EventCategory::CalledStrike,
        EventCategory::Ball,
        EventCategory::HitByPitch,
        EventCategory::Undefined,
        EventCategory::Unknown,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            EventCategory::Foul => "foul",
            EventCategory::InPlay => "in_play",
            EventCategory::Whiff => "whiff",
            EventCategory::CalledStrike => "called_strike",
            EventCategory::Ball => "ball",
            EventCategory::HitByPitch => "hit_by_pitch",
            EventCategory::Undefined => "undefined",
            EventCategory::Unknown => "unknown",
        }
    }

    pub const fn is_contact(self) -> bool {
        matches!(self, EventCategory::Foul | EventCategory::InPlay)
    }

    pub const fn is_non_contact(self) -> bool {
        matches!(
            self,
            EventCategory::Whiff
                | EventCategory::CalledStrike
                | EventCategory::Ball
                | EventCategory::HitByPitch
                | EventCategory::Undefined
        )
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized event category `{0}`")]
pub struct ParseCategoryError(String);

impl FromStr for EventCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_owned()))
    }
}

/// Pitch calls where the bat touched the ball.
pub const CONTACT_CALLS: [(&str, EventCategory); 4] = [
    ("FoulBall", EventCategory::Foul),
    ("FoulBallFieldable", EventCategory::Foul),
    ("FoulBallNotFieldable", EventCategory::Foul),
    ("InPlay", EventCategory::InPlay),
];

/// Pitch calls that ended without contact.
pub const NON_CONTACT_CALLS: [(&str, EventCategory); 5] = [
    ("StrikeSwinging", EventCategory::Whiff),
    ("StrikeCalled", EventCategory::CalledStrike),
    ("BallCalled", EventCategory::Ball),
    ("HitByPitch", EventCategory::HitByPitch),
    ("Undefined", EventCategory::Undefined),
];

static CONTACT_TABLE: LazyLock<FxHashMap<&'static str, EventCategory>> =
    LazyLock::new(|| CONTACT_CALLS.into_iter().collect());

static NON_CONTACT_TABLE: LazyLock<FxHashMap<&'static str, EventCategory>> =
    LazyLock::new(|| NON_CONTACT_CALLS.into_iter().collect());

/// Look a call up in the contact table only.
pub fn contact_category(call: &str) -> Option<EventCategory> {
    CONTACT_TABLE.get(call).copied()
}

/// Look a call up in the non-contact table only.
pub fn non_contact_category(call: &str) -> Option<EventCategory> {
    NON_CONTACT_TABLE.get(call).copied()
}

/// Resolve a raw pitch call. The contact table is consulted first; anything
/// missing from both tables, or an absent call, is [`EventCategory::Unknown`].
pub fn classify_call(call: Option<&str>) -> EventCategory {
    call.and_then(|call| contact_category(call).or_else(|| non_contact_category(call)))
        .unwrap_or(EventCategory::Unknown)
}
