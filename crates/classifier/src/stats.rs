#![forbid(unsafe_code)]

use crate::domain::EventCategory;
use serde::Serialize;

/// Counters accumulated across every categorization pass since the last
/// reset. Copying yields an independent snapshot.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunningStats {
    pub total_pitches_processed: u64,
    pub batches_processed: u64,

    pub contact_events_found: u64,
    pub fouls_found: u64,
    pub in_play_found: u64,
    pub exit_speeds_recorded: u64,

    pub non_contact_events_found: u64,
    pub whiffs_found: u64,
    pub called_strikes_found: u64,
    pub balls_found: u64,
    pub hit_by_pitch_found: u64,
    pub undefined_found: u64,

    pub unknown_found: u64,
}

impl RunningStats {
    pub(crate) fn begin_batch(&mut self, len: usize) {
        self.total_pitches_processed += len as u64;
        self.batches_processed += 1;
    }

    pub(crate) fn record(&mut self, category: EventCategory) {
        if category.is_contact() {
            self.contact_events_found += 1;
        } else if category.is_non_contact() {
            self.non_contact_events_found += 1;
        }

        let counter = match category {
            EventCategory::Foul => &mut self.fouls_found,
            EventCategory::InPlay => &mut self.in_play_found,
            EventCategory::Whiff => &mut self.whiffs_found,
            EventCategory::CalledStrike => &mut self.called_strikes_found,
            EventCategory::Ball => &mut self.balls_found,
            EventCategory::HitByPitch => &mut self.hit_by_pitch_found,
            EventCategory::Undefined => &mut self.undefined_found,
            EventCategory::Unknown => &mut self.unknown_found,
        };
        *counter += 1;
    }

    pub(crate) fn record_exit_speed(&mut self) {
        self.exit_speeds_recorded += 1;
    }

    /// Per-category counter, by category.
    pub fn found(&self, category: EventCategory) -> u64 {
        match category {
            EventCategory::Foul => self.fouls_found,
            EventCategory::InPlay => self.in_play_found,
            EventCategory::Whiff => self.whiffs_found,
            EventCategory::CalledStrike => self.called_strikes_found,
            EventCategory::Ball => self.balls_found,
            EventCategory::HitByPitch => self.hit_by_pitch_found,
            EventCategory::Undefined => self.undefined_found,
            EventCategory::Unknown => self.unknown_found,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}
