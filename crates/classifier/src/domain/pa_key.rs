#![forbid(unsafe_code)]

use serde::{Serialize, Serializer};
use std::fmt;

/// An inning or PA number as it appeared in the feed.
///
/// Whole values compare equal however they were written (`1`, `1.0`, `"1"`).
/// Any other finite value keeps its own identity, compared by bit pattern.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaNumber {
    Whole(i64),
    Fractional(u64),
}

impl PaNumber {
    /// `None` for NaN and infinities.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
            Some(Self::Whole(value as i64))
        } else {
            Some(Self::Fractional(value.to_bits()))
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Self::Whole(n) => n as f64,
            Self::Fractional(bits) => f64::from_bits(bits),
        }
    }
}

impl Default for PaNumber {
    fn default() -> Self {
        Self::Whole(0)
    }
}

impl From<i64> for PaNumber {
    fn from(value: i64) -> Self {
        Self::Whole(value)
    }
}

impl fmt::Display for PaNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Whole(n) => write!(f, "{n}"),
            Self::Fractional(_) => write!(f, "{}", self.as_f64()),
        }
    }
}

impl fmt::Debug for PaNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl Serialize for PaNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Whole(n) => serializer.serialize_i64(*n),
            Self::Fractional(_) => serializer.serialize_f64(self.as_f64()),
        }
    }
}

/// Identifies one plate appearance within a game: `(inning, pa_of_inning)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct PaKey {
    pub inning: PaNumber,
    pub pa_of_inning: PaNumber,
}

impl PaKey {
    pub const fn new(inning: i64, pa_of_inning: i64) -> Self {
        Self::from_numbers(PaNumber::Whole(inning), PaNumber::Whole(pa_of_inning))
    }

    pub const fn from_numbers(inning: PaNumber, pa_of_inning: PaNumber) -> Self {
        Self {
            inning,
            pa_of_inning,
        }
    }
}

impl fmt::Debug for PaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PaKey({}_{})", self.inning, self.pa_of_inning)
    }
}
