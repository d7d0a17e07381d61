#![forbid(unsafe_code)]

mod category;
mod pa_key;
mod record;

pub use category::{
    CONTACT_CALLS, EventCategory, NON_CONTACT_CALLS, ParseCategoryError, classify_call,
    contact_category, non_contact_category,
};
pub use pa_key::{PaKey, PaNumber};
pub use record::PitchRecord;
