use std::fs;
use std::path::Path;

use serde_json::Value;
use tempfile::tempdir;

use pheno_cli::cli::{MapArgs, OverlapArgs};
use pheno_cli::commands::{run_map, run_overlap};

const V1_CSV: &str = "SITE_ID,AGE_AT_SCAN,FIQ,SEX\nPITT,25.5,110,1\n";
const V2_TSV: &str = "site_id\tage at scan \tNEW_VAR\tsex\nBNI\t31.0\tx\t2\n";
const MAPPING_JSON: &str = r#"{
    "DD(source='Phenotypic_V1_0b.csv', variable='SITE_ID')": {
        "label": "Site",
        "valueType": "string",
        "source_variable": "SITE_ID"
    },
    "DD(source='Phenotypic_V1_0b.csv', variable='FIQ')": {
        "label": "Full Scale IQ",
        "source_variable": "FIQ"
    }
}"#;

fn write_fixtures(dir: &Path) -> (OverlapArgs, MapArgs) {
    let v1_csv = dir.join("v1.csv");
    let v2_tsv = dir.join("v2.tsv");
    let mapping = dir.join("terms.json");
    fs::write(&v1_csv, V1_CSV).expect("write v1 csv");
    fs::write(&v2_tsv, V2_TSV).expect("write v2 tsv");
    fs::write(&mapping, MAPPING_JSON).expect("write mapping json");
    let inputs = OverlapArgs {
        v1_csv: v1_csv.clone(),
        v2_tsv: v2_tsv.clone(),
    };
    let map_args = MapArgs {
        inputs: OverlapArgs { v1_csv, v2_tsv },
        mapping,
        output: dir.join("out.json"),
    };
    (inputs, map_args)
}

#[test]
fn overlap_classifies_fixture_headers() {
    let dir = tempdir().expect("create temp dir");
    let (args, _) = write_fixtures(dir.path());

    let outcome = run_overlap(&args).expect("run overlap");

    assert_eq!(outcome.v1_headers.len(), 4);
    assert_eq!(outcome.v2_headers.len(), 4);

    let exact: Vec<(&str, &str)> = outcome
        .report
        .exact
        .iter()
        .map(|pair| (pair.version2.as_str(), pair.version1.as_str()))
        .collect();
    assert!(exact.contains(&("site_id", "SITE_ID")));
    assert!(exact.contains(&("sex", "SEX")));

    assert_eq!(outcome.report.close.len(), 1);
    assert_eq!(outcome.report.close[0].version2, "age at scan");
    assert_eq!(outcome.report.close[0].version1, "AGE_AT_SCAN");

    assert_eq!(outcome.report.unmatched, vec!["NEW_VAR".to_string()]);
}

#[test]
fn map_writes_expected_term_mapping() {
    let dir = tempdir().expect("create temp dir");
    let (_, args) = write_fixtures(dir.path());

    let outcome = run_map(&args).expect("run map");

    assert_eq!(outcome.total_entries, 4);
    assert_eq!(outcome.summary.reused.len(), 1);
    assert_eq!(outcome.summary.reused[0].version1, "SITE_ID");
    // "age at scan" only close-matches AGE_AT_SCAN, so it is a placeholder;
    // "sex" exact-matches SEX, which has no annotation entry.
    assert_eq!(
        outcome.summary.placeholders,
        vec!["age at scan".to_string(), "NEW_VAR".to_string()]
    );
    assert_eq!(
        outcome.summary.fallback_placeholders,
        vec!["sex".to_string()]
    );

    let text = fs::read_to_string(&args.output).expect("read output");
    let parsed: Value = serde_json::from_str(&text).expect("valid JSON output");
    let entries = parsed.as_object().expect("object output");

    let keys: Vec<&String> = entries.keys().collect();
    assert_eq!(
        keys,
        vec![
            "DD(variable='site_id')",
            "DD(variable='age at scan')",
            "DD(variable='NEW_VAR')",
            "DD(variable='sex')",
        ]
    );

    let reused = &entries["DD(variable='site_id')"];
    assert_eq!(reused["source_variable"], "site_id");
    assert_eq!(reused["label"], "Site");
    assert_eq!(reused["valueType"], "string");

    let placeholder = entries["DD(variable='NEW_VAR')"]
        .as_object()
        .expect("placeholder object");
    assert_eq!(placeholder.len(), 3);
    assert_eq!(placeholder["associatedWith"], "NIDM");

    // 4-space indentation on the top level.
    assert!(text.contains("\n    \"DD(variable='site_id')\""));
}

#[test]
fn map_reruns_byte_identically() {
    let dir = tempdir().expect("create temp dir");
    let (_, args) = write_fixtures(dir.path());

    run_map(&args).expect("first run");
    let first = fs::read(&args.output).expect("read first output");
    run_map(&args).expect("second run");
    let second = fs::read(&args.output).expect("read second output");
    assert_eq!(first, second);
}

#[test]
fn map_fails_before_writing_when_mapping_is_malformed() {
    let dir = tempdir().expect("create temp dir");
    let (_, mut args) = write_fixtures(dir.path());
    fs::write(&args.mapping, "{ broken").expect("corrupt mapping file");
    args.output = dir.path().join("never.json");

    assert!(run_map(&args).is_err());
    assert!(!args.output.exists());
}
