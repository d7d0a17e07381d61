#![forbid(unsafe_code)]

use crate::domain::{PaKey, PitchRecord};
use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::trace;

/// Pitches thrown in one plate appearance.
#[derive(Debug, Clone, Serialize)]
pub struct PlateAppearance<'a> {
    #[serde(flatten)]
    pub key: PaKey,
    pub pitches: Vec<&'a PitchRecord>,
    /// At least one pitch in the group was a contact event.
    pub has_contact: bool,
}

/// Group pitches by `(inning, pa_of_inning)`. Groups come back in the order
/// their first pitch appears; pitches keep input order within a group.
pub fn group_plate_appearances(pitches: &[PitchRecord]) -> Vec<PlateAppearance<'_>> {
    let mut index: FxHashMap<PaKey, usize> = FxHashMap::default();
    let mut groups: Vec<PlateAppearance<'_>> = Vec::new();

    for pitch in pitches {
        let key = pitch.plate_appearance();
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(PlateAppearance {
                key,
                pitches: Vec::new(),
                has_contact: false,
            });
            groups.len() - 1
        });
        let group = &mut groups[slot];
        group.has_contact |= pitch.is_contact();
        group.pitches.push(pitch);
    }

    trace!(pitches = pitches.len(), groups = groups.len(), "grouped plate appearances");
    groups
}

/// Whether each plate appearance saw any contact.
fn contact_by_plate_appearance(pitches: &[PitchRecord]) -> FxHashMap<PaKey, bool> {
    let mut flags: FxHashMap<PaKey, bool> = FxHashMap::default();
    for pitch in pitches {
        *flags.entry(pitch.plate_appearance()).or_default() |= pitch.is_contact();
    }
    flags
}

/// Plate appearances with at least one contact pitch.
pub fn count_contact_plate_appearances(pitches: &[PitchRecord]) -> usize {
    contact_by_plate_appearance(pitches)
        .into_values()
        .filter(|contact| *contact)
        .count()
}

/// Plate appearances without a single contact pitch.
pub fn count_non_contact_plate_appearances(pitches: &[PitchRecord]) -> usize {
    contact_by_plate_appearance(pitches)
        .into_values()
        .filter(|contact| !*contact)
        .count()
}
