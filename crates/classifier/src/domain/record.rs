#![forbid(unsafe_code)]

use crate::domain::category::{EventCategory, classify_call, contact_category, non_contact_category};
use crate::domain::pa_key::{PaKey, PaNumber};
use serde::{Deserialize, Serialize};

/// A single pitch as delivered by the upstream feed.
///
/// Every field is optional. Accessors substitute the documented defaults:
/// an absent call classifies as [`EventCategory::Unknown`], absent (or null)
/// inning and PA numbers read as `0`, and an exit speed that is absent, zero or not
/// finite is treated as missing. Fields the classifier does not use are kept
/// in `extra` and written back out unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PitchRecord {
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub pitch_call: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::float",
        skip_serializing_if = "Option::is_none"
    )]
    pub exit_speed: Option<f64>,

    #[serde(
        default,
        deserialize_with = "lenient::pa_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub inning: Option<PaNumber>,

    #[serde(
        default,
        deserialize_with = "lenient::pa_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub pa_of_inning: Option<PaNumber>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl PitchRecord {
    pub fn new(pitch_call: impl Into<String>) -> Self {
        Self {
            pitch_call: Some(pitch_call.into()),
            ..Default::default()
        }
    }

    pub fn with_exit_speed(mut self, mph: f64) -> Self {
        self.exit_speed = Some(mph);
        self
    }

    pub fn at(mut self, inning: i64, pa_of_inning: i64) -> Self {
        self.inning = Some(PaNumber::Whole(inning));
        self.pa_of_inning = Some(PaNumber::Whole(pa_of_inning));
        self
    }

    pub fn pitch_call(&self) -> Option<&str> {
        self.pitch_call.as_deref()
    }

    /// Exit speed usable for velocity statistics.
    pub fn exit_speed(&self) -> Option<f64> {
        self.exit_speed.filter(|mph| *mph != 0.0 && mph.is_finite())
    }

    pub fn inning(&self) -> PaNumber {
        self.inning.unwrap_or_default()
    }

    pub fn pa_of_inning(&self) -> PaNumber {
        self.pa_of_inning.unwrap_or_default()
    }

    pub fn plate_appearance(&self) -> PaKey {
        PaKey::from_numbers(self.inning(), self.pa_of_inning())
    }

    pub fn category(&self) -> EventCategory {
        classify_call(self.pitch_call())
    }

    pub fn is_contact(&self) -> bool {
        self.pitch_call().and_then(contact_category).is_some()
    }

    pub fn is_non_contact(&self) -> bool {
        self.pitch_call().and_then(non_contact_category).is_some()
    }
}

/// Field deserializers that turn values of the wrong shape into `None`
/// instead of failing the whole record.
mod lenient {
    use super::PaNumber;
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Bool(#[allow(dead_code)] bool),
        Int(i64),
        Float(f64),
        Str(String),
        Other(#[allow(dead_code)] IgnoredAny),
    }

    pub fn string<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
        Ok(match Loose::deserialize(de)? {
            Loose::Str(s) => Some(s),
            _ => None,
        })
    }

    pub fn float<'de, D: Deserializer<'de>>(de: D) -> Result<Option<f64>, D::Error> {
        Ok(match Loose::deserialize(de)? {
            Loose::Int(i) => Some(i as f64),
            Loose::Float(f) => Some(f),
            Loose::Str(s) => s.trim().parse().ok(),
            _ => None,
        })
    }

    pub fn pa_number<'de, D: Deserializer<'de>>(de: D) -> Result<Option<PaNumber>, D::Error> {
        Ok(match Loose::deserialize(de)? {
            Loose::Int(i) => Some(PaNumber::Whole(i)),
            Loose::Float(f) => PaNumber::from_f64(f),
            Loose::Str(s) => {
                let s = s.trim();
                match s.parse() {
                    Ok(i) => Some(PaNumber::Whole(i)),
                    Err(_) => s.parse().ok().and_then(PaNumber::from_f64),
                }
            }
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> PitchRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn well_formed_record() {
        let pitch = parse(json!({
            "pitch_call": "InPlay",
            "exit_speed": 101.3,
            "inning": 4,
            "pa_of_inning": 2,
            "pitcher": "Doe, J"
        }));
        assert_eq!(pitch.pitch_call(), Some("InPlay"));
        assert_eq!(pitch.exit_speed(), Some(101.3));
        assert_eq!(pitch.plate_appearance(), PaKey::new(4, 2));
        assert_eq!(pitch.extra.get("pitcher"), Some(&json!("Doe, J")));
        assert_eq!(pitch.category(), EventCategory::InPlay);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let pitch = parse(json!({}));
        assert_eq!(pitch.pitch_call(), None);
        assert_eq!(pitch.exit_speed(), None);
        assert_eq!(pitch.inning(), PaNumber::Whole(0));
        assert_eq!(pitch.pa_of_inning(), PaNumber::Whole(0));
        assert_eq!(pitch.category(), EventCategory::Unknown);
        assert!(!pitch.is_contact());
        assert!(!pitch.is_non_contact());
    }

    #[test]
    fn wrong_types_degrade_to_absent() {
        let pitch = parse(json!({
            "pitch_call": 7,
            "exit_speed": {"mph": 90},
            "inning": "third",
            "pa_of_inning": null
        }));
        assert_eq!(pitch.pitch_call, None);
        assert_eq!(pitch.exit_speed, None);
        assert_eq!(pitch.inning, None);
        assert_eq!(pitch.pa_of_inning, None);
    }

    #[test]
    fn numeric_strings_and_integral_floats_are_accepted() {
        let pitch = parse(json!({
            "exit_speed": "88.5",
            "inning": 3.0,
            "pa_of_inning": " 5 "
        }));
        assert_eq!(pitch.exit_speed(), Some(88.5));
        assert_eq!(pitch.inning(), PaNumber::Whole(3));
        assert_eq!(pitch.pa_of_inning(), PaNumber::Whole(5));
    }

    #[test]
    fn fractional_numbers_are_kept() {
        let pitch = parse(json!({ "inning": 2.5, "pa_of_inning": "1.25" }));
        assert_eq!(pitch.inning, PaNumber::from_f64(2.5));
        assert_eq!(pitch.pa_of_inning, PaNumber::from_f64(1.25));
        assert_ne!(pitch.plate_appearance(), PaKey::new(0, 0));
        assert_eq!(
            serde_json::to_value(&pitch).unwrap(),
            json!({ "inning": 2.5, "pa_of_inning": 1.25 })
        );
    }

    #[test]
    fn zero_exit_speed_is_not_usable() {
        let pitch = PitchRecord::new("InPlay").with_exit_speed(0.0);
        assert_eq!(pitch.exit_speed, Some(0.0));
        assert_eq!(pitch.exit_speed(), None);
        assert_eq!(PitchRecord::new("InPlay").with_exit_speed(f64::NAN).exit_speed(), None);
    }

    #[test]
    fn serialization_keeps_unknown_fields() {
        let value = json!({
            "pitch_call": "BallCalled",
            "inning": 1,
            "pa_of_inning": 1,
            "tagged_pitch_type": "Slider"
        });
        let pitch = parse(value.clone());
        assert_eq!(serde_json::to_value(&pitch).unwrap(), value);
    }
}
