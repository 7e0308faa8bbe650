pub mod descriptor;
pub mod matching;

pub use descriptor::DescriptorKey;
pub use matching::{HeaderMatch, OverlapReport, ReusedEntry, SynthesisSummary};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_report_serializes() {
        let report = OverlapReport {
            exact: vec![HeaderMatch {
                version2: "site_id".to_string(),
                version1: "SITE_ID".to_string(),
            }],
            close: vec![],
            unmatched: vec!["NEW_VAR".to_string()],
        };
        let json = serde_json::to_string(&report).expect("serialize report");
        let round: OverlapReport = serde_json::from_str(&json).expect("deserialize report");
        assert_eq!(round.exact.len(), 1);
        assert_eq!(round.unmatched, vec!["NEW_VAR".to_string()]);
    }

    #[test]
    fn synthesis_summary_counts() {
        let summary = SynthesisSummary {
            reused: vec![ReusedEntry {
                version2: "site_id".to_string(),
                version1: "SITE_ID".to_string(),
                value_type: Some("string".to_string()),
            }],
            placeholders: vec!["NEW_VAR".to_string()],
            fallback_placeholders: vec![],
        };
        assert_eq!(summary.total(), 2);
    }
}
