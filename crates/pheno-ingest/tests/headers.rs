use std::fs;

use tempfile::tempdir;

use pheno_ingest::{read_csv_headers, read_headers, read_tsv_headers};

#[test]
fn reads_csv_header_row_only() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("v1.csv");
    fs::write(&path, "SITE_ID,AGE_AT_SCAN,FIQ\n1,2,3\n4,5,6\n").expect("write file");

    let headers = read_csv_headers(&path).expect("read headers");
    assert_eq!(headers, vec!["SITE_ID", "AGE_AT_SCAN", "FIQ"]);
}

#[test]
fn reads_tsv_headers_with_trailing_whitespace() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("v2.tsv");
    fs::write(&path, "site_id\tage at scan \tNEW_VAR\t\n").expect("write file");

    let headers = read_tsv_headers(&path).expect("read headers");
    assert_eq!(headers, vec!["site_id", "age at scan", "NEW_VAR", ""]);
}

#[test]
fn strips_leading_bom() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("bom.csv");
    fs::write(&path, "\u{feff}SITE_ID,AGE\n").expect("write file");

    let headers = read_csv_headers(&path).expect("read headers");
    assert_eq!(headers, vec!["SITE_ID", "AGE"]);
}

#[test]
fn empty_file_yields_empty_sequence() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("empty.csv");
    fs::write(&path, "").expect("write file");

    let headers = read_csv_headers(&path).expect("read headers");
    assert!(headers.is_empty());
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("missing.csv");

    assert!(read_csv_headers(&path).is_err());
}

#[test]
fn quoted_fields_keep_embedded_delimiters() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("quoted.csv");
    fs::write(&path, "\"AGE, YEARS\",SITE_ID\n").expect("write file");

    let headers = read_headers(&path, b',').expect("read headers");
    assert_eq!(headers, vec!["AGE, YEARS", "SITE_ID"]);
}

#[test]
fn duplicate_headers_pass_through() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("dup.csv");
    fs::write(&path, "SITE_ID,SITE_ID\n").expect("write file");

    let headers = read_csv_headers(&path).expect("read headers");
    assert_eq!(headers, vec!["SITE_ID", "SITE_ID"]);
}
