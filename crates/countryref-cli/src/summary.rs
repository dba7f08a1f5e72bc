//! Verbose run summary printed to stderr after a build.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::BuildReport;

/// Print the reconciliation counts. Goes to stderr so the table output on
/// stdout stays machine-readable.
pub fn print_summary(report: &BuildReport) {
    let stats = &report.stats;
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![header_cell("Reconciliation"), header_cell("Count")]);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    table.add_row(vec![Cell::new("Observations"), Cell::new(stats.observations)]);
    table.add_row(vec![
        Cell::new("Entities merged"),
        Cell::new(stats.entities_merged),
    ]);
    table.add_row(vec![
        Cell::new("Entities emitted"),
        Cell::new(stats.entities_emitted),
    ]);
    table.add_row(vec![
        Cell::new("Entities with dialing code"),
        Cell::new(stats.entities_with_idc),
    ]);
    table.add_row(vec![
        Cell::new("Entities with region slot"),
        Cell::new(stats.entities_slotted),
    ]);
    table.add_row(vec![
        Cell::new("Field conflicts resolved"),
        count_cell(stats.field_conflicts, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Loud warnings"),
        count_cell(stats.loud_warnings, Color::Red),
    ]);

    eprintln!("{table}");
    if !report.missing_sources.is_empty() {
        let names: Vec<&str> = report
            .missing_sources
            .iter()
            .map(|source| source.as_str())
            .collect();
        eprintln!("Missing sources: {}", names.join(", "));
    }
    if let Some(path) = &report.output {
        eprintln!("Output: {}", path.display());
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        Cell::new(count)
    } else {
        Cell::new(count).fg(color)
    }
}
