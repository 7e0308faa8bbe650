//! Console rendering for overlap reports and synthesis summaries.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use pheno_model::HeaderMatch;

use crate::commands::{MapOutcome, OverlapOutcome};

const UNMATCHED_PREVIEW: usize = 50;

pub fn print_overlap_report(outcome: &OverlapOutcome) {
    println!("Version-1 headers: {}", outcome.v1_headers.len());
    println!("Version-2 headers: {}", outcome.v2_headers.len());
    println!();

    print_match_table("Exact matches (case-insensitive)", &outcome.report.exact);
    print_match_table(
        "Close matches (ignoring '_', ' ', '-')",
        &outcome.report.close,
    );

    println!(
        "Unmatched version-2 variables: {}",
        outcome.report.unmatched.len()
    );
    for name in outcome.report.unmatched.iter().take(UNMATCHED_PREVIEW) {
        println!("  {name}");
    }
    if outcome.report.unmatched.len() > UNMATCHED_PREVIEW {
        println!(
            "  ... and {} more",
            outcome.report.unmatched.len() - UNMATCHED_PREVIEW
        );
    }
}

pub fn print_synthesis_summary(outcome: &MapOutcome) {
    let summary = &outcome.summary;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Outcome"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Reused version-1 annotations"),
        Cell::new(summary.reused.len()),
    ]);
    table.add_row(vec![
        Cell::new("Placeholders (version-2 only)"),
        Cell::new(summary.placeholders.len()),
    ]);
    table.add_row(vec![
        Cell::new("Placeholders (matched, unannotated)"),
        count_cell(summary.fallback_placeholders.len(), Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Total entries").add_attribute(Attribute::Bold),
        Cell::new(outcome.total_entries).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    println!("Term mapping written to: {}", outcome.output.display());
}

fn print_match_table(title: &str, matches: &[HeaderMatch]) {
    println!("{title}: {}", matches.len());
    if matches.is_empty() {
        println!();
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Version 2"), header_cell("Version 1")]);
    apply_table_style(&mut table);
    for pair in matches {
        table.add_row(vec![Cell::new(&pair.version2), Cell::new(&pair.version1)]);
    }
    println!("{table}");
    println!();
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(value: usize, color: Color) -> Cell {
    if value > 0 {
        Cell::new(value).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(value).fg(Color::DarkGrey)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
