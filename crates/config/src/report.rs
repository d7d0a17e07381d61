#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Report {
    /// Width of the `=` rules framing the text report.
    pub rule_width: usize,
}

impl Default for Report {
    fn default() -> Self {
        Self { rule_width: 50 }
    }
}
