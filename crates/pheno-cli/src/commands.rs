//! Command runners for the harmonizer CLI.
//!
//! Each runner takes parsed arguments and returns a structured outcome so
//! the rendering layer and tests can consume results without touching the
//! console.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use pheno_ingest::{load_term_mapping, read_csv_headers, read_tsv_headers};
use pheno_map::{match_headers, synthesize, write_mapping};
use pheno_model::{OverlapReport, SynthesisSummary};

use crate::cli::{MapArgs, OverlapArgs};

/// Everything the overlap report needs to render.
pub struct OverlapOutcome {
    pub v1_headers: Vec<String>,
    pub v2_headers: Vec<String>,
    pub report: OverlapReport,
}

/// Everything the synthesis summary needs to render.
pub struct MapOutcome {
    pub summary: SynthesisSummary,
    pub output: PathBuf,
    pub total_entries: usize,
}

/// Loads both header rows and classifies the version-2 variables.
pub fn run_overlap(args: &OverlapArgs) -> Result<OverlapOutcome> {
    let span = info_span!("overlap");
    let _guard = span.enter();

    let (v1_headers, v2_headers) = load_header_rows(args)?;
    let report = match_headers(&v1_headers, &v2_headers);
    info!(
        exact = report.exact.len(),
        close = report.close.len(),
        unmatched = report.unmatched.len(),
        "classified version-2 headers"
    );
    Ok(OverlapOutcome {
        v1_headers,
        v2_headers,
        report,
    })
}

/// Builds the version-2 term mapping and writes it to the output path.
///
/// Nothing is written until every input has loaded successfully, so a
/// failed run never leaves a partial output file behind.
pub fn run_map(args: &MapArgs) -> Result<MapOutcome> {
    let span = info_span!("map");
    let _guard = span.enter();

    let (v1_headers, v2_headers) = load_header_rows(&args.inputs)?;
    let mapping = load_term_mapping(&args.mapping)
        .with_context(|| format!("load term mapping from {}", args.mapping.display()))?;
    let annotations = mapping.by_variable();

    let synthesis = synthesize(&v1_headers, &v2_headers, &annotations);
    for entry in &synthesis.summary.reused {
        info!(
            version2 = %entry.version2,
            version1 = %entry.version1,
            value_type = entry.value_type.as_deref().unwrap_or("N/A"),
            "reused annotation entry"
        );
    }

    let total_entries = synthesis.mapping.len();
    write_mapping(&args.output, &synthesis.mapping)?;
    info!(path = %args.output.display(), entries = total_entries, "wrote term mapping");

    Ok(MapOutcome {
        summary: synthesis.summary,
        output: args.output.clone(),
        total_entries,
    })
}

fn load_header_rows(args: &OverlapArgs) -> Result<(Vec<String>, Vec<String>)> {
    let v1_headers = read_csv_headers(&args.v1_csv)
        .with_context(|| format!("load version-1 headers from {}", args.v1_csv.display()))?;
    let v2_headers = read_tsv_headers(&args.v2_tsv)
        .with_context(|| format!("load version-2 headers from {}", args.v2_tsv.display()))?;
    Ok((v1_headers, v2_headers))
}
