//! Match records and run summaries shared across the workspace.

use serde::{Deserialize, Serialize};

/// A pair of header names asserted to refer to the same variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderMatch {
    /// Header as it appears in the version-2 table.
    pub version2: String,
    /// Header as it appears in the version-1 table.
    pub version1: String,
}

/// Classification of every version-2 header against the version-1 headers.
///
/// A pair reported in `exact` never also appears in `close`; names in
/// `unmatched` appear in neither.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverlapReport {
    /// Pairs that differ only by case.
    pub exact: Vec<HeaderMatch>,
    /// Pairs that additionally differ by underscores, spaces, or hyphens.
    pub close: Vec<HeaderMatch>,
    /// Version-2 headers with no counterpart, in header order.
    pub unmatched: Vec<String>,
}

impl OverlapReport {
    /// Returns true when the given version-2 header appears in a match pair.
    pub fn is_matched(&self, version2: &str) -> bool {
        self.exact
            .iter()
            .chain(&self.close)
            .any(|pair| pair.version2 == version2)
    }
}

/// One reused annotation entry from a synthesis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReusedEntry {
    /// Version-2 header the entry was registered under.
    pub version2: String,
    /// Version-1 variable the entry was copied from.
    pub version1: String,
    /// `valueType` field of the copied entry, when present.
    pub value_type: Option<String>,
}

/// Per-class outcome of a synthesis run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SynthesisSummary {
    /// Version-2 variables whose version-1 annotation entry was reused.
    pub reused: Vec<ReusedEntry>,
    /// Version-2-only variables given minimal placeholder entries.
    pub placeholders: Vec<String>,
    /// Variables that matched version 1 but had no annotation entry there,
    /// given placeholders instead of being dropped.
    pub fallback_placeholders: Vec<String>,
}

impl SynthesisSummary {
    /// Total number of output entries accounted for by this summary.
    pub fn total(&self) -> usize {
        self.reused.len() + self.placeholders.len() + self.fallback_placeholders.len()
    }
}
