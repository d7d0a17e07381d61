#![forbid(unsafe_code)]

use config::RoundingMode;

/// Round to one decimal place.
///
/// [`RoundingMode::HalfEven`] goes through the shortest exact decimal
/// expansion, so a value such as `0.35` (stored as `0.34999…`) rounds down
/// and exact ties go to the even digit.
pub fn round1(value: f64, mode: RoundingMode) -> f64 {
    match mode {
        RoundingMode::HalfEven => format!("{value:.1}").parse().unwrap_or(value),
        RoundingMode::HalfUp => (value * 10.0).round() / 10.0,
    }
}

/// `count / total` as a rounded percentage; `0.0` when `total` is zero.
pub fn percentage(count: usize, total: usize, mode: RoundingMode) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round1(count as f64 / total as f64 * 100.0, mode)
}

/// Quantile `q ∈ [0, 1]` of already sorted data, interpolating linearly
/// between the two closest order statistics at position `(n - 1) · q`.
///
/// Returns `None` for an empty slice.
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let position = last as f64 * q.clamp(0.0, 1.0);
    let below = position.floor();
    let lower = sorted[below as usize];
    let upper = sorted[(position.ceil() as usize).min(last)];
    Some(lerp(lower, upper, position - below))
}

/// Interpolate from whichever end is closer to keep `lerp(a, b, 1) == b`.
#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let diff = b - a;
    if t >= 0.5 { b - diff * (1.0 - t) } else { a + diff * t }
}
