// ⚠️ Analysis Errors - Sentinels for empty or unusable input
//
// Statistics and readability never panic on degenerate input. They return one
// of these instead, and the sentinel serializes as {"error": "..."} so JSON
// dumps keep the same shape as a successful report.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// Record-level input was empty ("No data to process")
    NoData,

    /// Series-level input was empty ("No data available")
    NoSeriesData,

    /// Text had no sentences or no words
    InvalidText,
}

impl AnalysisError {
    pub fn message(&self) -> &'static str {
        match self {
            AnalysisError::NoData => "No data to process",
            AnalysisError::NoSeriesData => "No data available",
            AnalysisError::InvalidText => "Invalid text for analysis",
        }
    }
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for AnalysisError {}

impl Serialize for AnalysisError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("error", self.message())?;
        map.end()
    }
}

// ============================================================================
// TESTS
// ============================================================================
