#![forbid(unsafe_code)]

use crate::categorize::CategorizedResult;
use crate::math::{percentage, quantile, round1};
use config::{RoundingMode, Thresholds};
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExitVeloPercentiles {
    #[serde(rename = "25th")]
    pub p25: f64,
    #[serde(rename = "50th")]
    pub p50: f64,
    #[serde(rename = "75th")]
    pub p75: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ContactSummary {
    pub total_contacts: usize,
    pub fouls: usize,
    pub in_play: usize,
    pub weak_contact: usize,
    pub hard_contact: usize,

    pub contact_rate: f64,
    pub foul_rate: f64,
    pub in_play_rate: f64,

    pub avg_exit_velo: f64,
    pub max_exit_velo: f64,
    /// Absent when no in-play pitch carried a usable exit speed. Serialized
    /// as an empty object in that case.
    #[serde(serialize_with = "empty_when_none")]
    pub exit_velo_percentiles: Option<ExitVeloPercentiles>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct NonContactSummary {
    pub total_non_contacts: usize,
    pub whiffs: usize,
    pub called_strikes: usize,
    pub balls: usize,
    pub hit_by_pitch: usize,
    pub undefined: usize,

    pub whiff_rate: f64,
    pub called_strike_rate: f64,
    pub ball_rate: f64,
    pub hit_by_pitch_rate: f64,

    /// Whiffs plus every contact pitch.
    pub swings: usize,
    pub swing_rate: f64,
    pub whiff_per_swing: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Totals {
    pub pitches_analyzed: usize,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompleteSummary {
    pub contact: ContactSummary,
    pub non_contact: NonContactSummary,
    pub totals: Totals,
}

impl ContactSummary {
    /// Reduce a categorized batch of `total` pitches.
    pub fn from_categorized(
        categorized: &CategorizedResult<'_>,
        total: usize,
        thresholds: &Thresholds,
        rounding: RoundingMode,
    ) -> Self {
        let contacts = &categorized.contact;
        if contacts.all.is_empty() {
            return Self::default();
        }

        let mut exit_speeds = categorized.in_play_exit_speeds();
        let weak_contact = exit_speeds
            .iter()
            .filter(|mph| **mph < thresholds.weak_contact)
            .count();
        let hard_contact = exit_speeds
            .iter()
            .filter(|mph| **mph >= thresholds.hard_contact)
            .count();

        let (avg_exit_velo, max_exit_velo) = if exit_speeds.is_empty() {
            (0.0, 0.0)
        } else {
            let sum: f64 = exit_speeds.iter().sum();
            let max = exit_speeds.iter().copied().fold(f64::MIN, f64::max);
            (round1(sum / exit_speeds.len() as f64, rounding), max)
        };

        exit_speeds.sort_by(f64::total_cmp);
        let at = |q: f64| quantile(&exit_speeds, q).map(|v| round1(v, rounding));
        let exit_velo_percentiles = match (at(0.25), at(0.50), at(0.75)) {
            (Some(p25), Some(p50), Some(p75)) => Some(ExitVeloPercentiles { p25, p50, p75 }),
            _ => None,
        };

        Self {
            total_contacts: contacts.all.len(),
            fouls: contacts.foul.len(),
            in_play: contacts.in_play.len(),
            weak_contact,
            hard_contact,
            contact_rate: percentage(contacts.all.len(), total, rounding),
            foul_rate: percentage(contacts.foul.len(), total, rounding),
            in_play_rate: percentage(contacts.in_play.len(), total, rounding),
            avg_exit_velo,
            max_exit_velo,
            exit_velo_percentiles,
        }
    }
}

impl NonContactSummary {
    /// Reduce a categorized batch of `total` pitches.
    pub fn from_categorized(
        categorized: &CategorizedResult<'_>,
        total: usize,
        rounding: RoundingMode,
    ) -> Self {
        let non_contact = &categorized.non_contact;
        let whiffs = non_contact.whiff.len();
        let swings = whiffs + categorized.contact.all.len();

        Self {
            total_non_contacts: non_contact.all.len(),
            whiffs,
            called_strikes: non_contact.called_strike.len(),
            balls: non_contact.ball.len(),
            hit_by_pitch: non_contact.hit_by_pitch.len(),
            undefined: non_contact.undefined.len(),
            whiff_rate: percentage(whiffs, total, rounding),
            called_strike_rate: percentage(non_contact.called_strike.len(), total, rounding),
            ball_rate: percentage(non_contact.ball.len(), total, rounding),
            hit_by_pitch_rate: percentage(non_contact.hit_by_pitch.len(), total, rounding),
            swings,
            swing_rate: percentage(swings, total, rounding),
            whiff_per_swing: percentage(whiffs, swings, rounding),
        }
    }
}

fn empty_when_none<S: Serializer>(
    percentiles: &Option<ExitVeloPercentiles>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeMap;
    match percentiles {
        Some(percentiles) => percentiles.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}
