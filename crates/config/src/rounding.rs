use serde::{Deserialize, Serialize};

/// How rates, averages and percentiles are rounded to one decimal place.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundingMode {
    /// Round the exact binary value, ties to even. `0.25` becomes `0.2` and
    /// `0.35` becomes `0.3` since the latter is stored slightly below the tie.
    #[default]
    #[serde(rename = "half_even")]
    HalfEven,

    /// Ties away from zero on the scaled value. `0.25` becomes `0.3`.
    #[serde(rename = "half_up")]
    HalfUp,
}
