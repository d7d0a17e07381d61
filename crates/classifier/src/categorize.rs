#![forbid(unsafe_code)]

use crate::domain::{EventCategory, PitchRecord};
use serde::Serialize;

/// Contact pitches by outcome. `all` holds every contact pitch in input order.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ContactBuckets<'a> {
    pub foul: Vec<&'a PitchRecord>,
    pub in_play: Vec<&'a PitchRecord>,
    pub all: Vec<&'a PitchRecord>,
}

/// Non-contact pitches by outcome. `all` holds every non-contact pitch in
/// input order.
#[derive(Debug, Default, Clone, Serialize)]
pub struct NonContactBuckets<'a> {
    pub whiff: Vec<&'a PitchRecord>,
    pub called_strike: Vec<&'a PitchRecord>,
    pub ball: Vec<&'a PitchRecord>,
    pub hit_by_pitch: Vec<&'a PitchRecord>,
    pub undefined: Vec<&'a PitchRecord>,
    pub all: Vec<&'a PitchRecord>,
}

/// Pitches of one batch grouped by category. Buckets borrow from the input
/// slice and keep its order.
#[derive(Debug, Default, Clone, Serialize)]
pub struct CategorizedResult<'a> {
    pub contact: ContactBuckets<'a>,
    pub non_contact: NonContactBuckets<'a>,
    pub unknown: Vec<&'a PitchRecord>,
}

impl<'a> CategorizedResult<'a> {
    pub(crate) fn push(&mut self, category: EventCategory, pitch: &'a PitchRecord) {
        let leaf = match category {
            EventCategory::Foul => &mut self.contact.foul,
            EventCategory::InPlay => &mut self.contact.in_play,
            EventCategory::Whiff => &mut self.non_contact.whiff,
            EventCategory::CalledStrike => &mut self.non_contact.called_strike,
            EventCategory::Ball => &mut self.non_contact.ball,
            EventCategory::HitByPitch => &mut self.non_contact.hit_by_pitch,
            EventCategory::Undefined => &mut self.non_contact.undefined,
            EventCategory::Unknown => {
                self.unknown.push(pitch);
                return;
            }
        };
        leaf.push(pitch);

        if category.is_contact() {
            self.contact.all.push(pitch);
        } else {
            self.non_contact.all.push(pitch);
        }
    }

    /// Leaf bucket for a category.
    pub fn bucket(&self, category: EventCategory) -> &[&'a PitchRecord] {
        match category {
            EventCategory::Foul => &self.contact.foul,
            EventCategory::InPlay => &self.contact.in_play,
            EventCategory::Whiff => &self.non_contact.whiff,
            EventCategory::CalledStrike => &self.non_contact.called_strike,
            EventCategory::Ball => &self.non_contact.ball,
            EventCategory::HitByPitch => &self.non_contact.hit_by_pitch,
            EventCategory::Undefined => &self.non_contact.undefined,
            EventCategory::Unknown => &self.unknown,
        }
    }

    /// Number of pitches across the three top-level buckets.
    pub fn len(&self) -> usize {
        self.contact.all.len() + self.non_contact.all.len() + self.unknown.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Usable exit speeds of the in-play pitches, in input order.
    pub fn in_play_exit_speeds(&self) -> Vec<f64> {
        self.contact
            .in_play
            .iter()
            .filter_map(|pitch| pitch.exit_speed())
            .collect()
    }
}
