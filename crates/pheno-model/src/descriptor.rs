//! Parser and formatter for the textual descriptor keys used in term
//! mapping files.
//!
//! Keys follow the convention `DD(source='<file>', variable='<name>')`.
//! Synthesized keys omit the source component: `DD(variable='<name>')`.
//! Parsing and formatting live here so the encoding is defined in one
//! place instead of being string-sliced at every call site.

use std::fmt;

const SOURCE_MARKER: &str = "source='";
const VARIABLE_MARKER: &str = "variable='";

/// A descriptor key identifying a variable and, optionally, the source
/// file it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorKey {
    /// Source file component, absent from synthesized keys.
    pub source: Option<String>,
    /// Variable name component.
    pub variable: String,
}

impl DescriptorKey {
    /// Creates a key carrying only a variable name.
    pub fn for_variable(variable: impl Into<String>) -> Self {
        Self {
            source: None,
            variable: variable.into(),
        }
    }

    /// Parses a descriptor key string.
    ///
    /// Returns `None` when the `variable='` marker is absent or its quote
    /// is unterminated. Absence is not an error: mapping files may carry
    /// keys in other shapes, and callers skip those.
    pub fn parse(raw: &str) -> Option<Self> {
        let variable = quoted_field(raw, VARIABLE_MARKER)?;
        let source = quoted_field(raw, SOURCE_MARKER);
        Some(Self { source, variable })
    }
}

/// Extracts the text between `marker` and the next single quote.
fn quoted_field(raw: &str, marker: &str) -> Option<String> {
    let start = raw.find(marker)? + marker.len();
    let rest = &raw[start..];
    let end = rest.find('\'')?;
    Some(rest[..end].to_string())
}

impl fmt::Display for DescriptorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "DD(source='{source}', variable='{}')", self.variable),
            None => write!(f, "DD(variable='{}')", self.variable),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_key_with_source() {
        let key = DescriptorKey::parse("DD(source='Phenotypic_V1_0b.csv', variable='SITE_ID')")
            .expect("parse key");
        assert_eq!(key.source.as_deref(), Some("Phenotypic_V1_0b.csv"));
        assert_eq!(key.variable, "SITE_ID");
    }

    #[test]
    fn parses_key_without_source() {
        let key = DescriptorKey::parse("DD(variable='AGE_AT_SCAN')").expect("parse key");
        assert_eq!(key.source, None);
        assert_eq!(key.variable, "AGE_AT_SCAN");
    }

    #[test]
    fn rejects_key_without_variable_marker() {
        assert_eq!(DescriptorKey::parse("metadata"), None);
        assert_eq!(DescriptorKey::parse("DD(source='file.csv')"), None);
    }

    #[test]
    fn rejects_unterminated_quote() {
        assert_eq!(DescriptorKey::parse("DD(variable='SITE_ID"), None);
    }

    #[test]
    fn formats_without_source() {
        let key = DescriptorKey::for_variable("NEW_VAR");
        assert_eq!(key.to_string(), "DD(variable='NEW_VAR')");
    }

    #[test]
    fn round_trips_through_display() {
        let key = DescriptorKey {
            source: Some("table.csv".to_string()),
            variable: "FIQ".to_string(),
        };
        let parsed = DescriptorKey::parse(&key.to_string()).expect("parse formatted key");
        assert_eq!(parsed, key);
    }
}
