#![forbid(unsafe_code)]

pub mod categorize;
pub mod clock;
pub mod domain;
pub mod error;
pub mod filter;
pub mod input;
pub mod math;
pub mod plate_appearance;
pub mod report;
pub mod stats;
pub mod summary;

pub use categorize::{CategorizedResult, ContactBuckets, NonContactBuckets};
pub use clock::{Clock, FixedClock, SystemClock};
pub use domain::{EventCategory, PaKey, PaNumber, PitchRecord};
pub use error::Error;
pub use filter::ContactFilter;
pub use input::{load_pitches, load_pitches_from_path};
pub use plate_appearance::{
    PlateAppearance, count_contact_plate_appearances, count_non_contact_plate_appearances,
    group_plate_appearances,
};
pub use stats::RunningStats;
pub use summary::{CompleteSummary, ContactSummary, ExitVeloPercentiles, NonContactSummary, Totals};
