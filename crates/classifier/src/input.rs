#![forbid(unsafe_code)]

use crate::domain::PitchRecord;
use crate::error::Error;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, warn};

/// Read pitch records from a JSON document whose top level is an array.
///
/// Array elements that are not objects are skipped. Any other top-level
/// shape is rejected with [`Error::InvalidInput`].
pub fn load_pitches<R: Read>(reader: R) -> Result<Vec<PitchRecord>, Error> {
    let document: Value = serde_json::from_reader(reader)?;
    let items = match document {
        Value::Array(items) => items,
        other => {
            return Err(Error::InvalidInput(format!(
                "expected an array of pitch records, found {}",
                kind(&other)
            )));
        }
    };

    let total = items.len();
    let mut pitches = Vec::with_capacity(total);
    for (index, item) in items.into_iter().enumerate() {
        if !item.is_object() {
            warn!(index, kind = kind(&item), "skipping pitch record that is not an object");
            continue;
        }
        pitches.push(serde_json::from_value(item)?);
    }

    debug!(total, loaded = pitches.len(), "loaded pitch records");
    Ok(pitches)
}

pub fn load_pitches_from_path(path: impl AsRef<Path>) -> Result<Vec<PitchRecord>, Error> {
    let file = File::open(path)?;
    load_pitches(BufReader::new(file))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
