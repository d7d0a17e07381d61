#![forbid(unsafe_code)]

use crate::rounding::RoundingMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Summary {
    /// Rounding applied to every percentage, average and percentile.
    ///
    /// See [`RoundingMode`] for possible values.
    pub rounding: RoundingMode,
}
