//! Snapshot file reading shared by the source adapters.
//!
//! Every snapshot is a small CSV with a fixed per-source schema; adapters
//! address cells by column name so a snapshot may carry extra columns or
//! reorder them without breaking ingestion.

use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};

/// One fully loaded snapshot file: resolved header plus data rows.
pub struct Snapshot {
    columns: Vec<String>,
    rows: Vec<StringRecord>,
}

/// Read a snapshot file. Header cells are BOM-stripped and trimmed.
pub fn read_snapshot(path: &Path) -> Result<Snapshot> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("open snapshot {}", path.display()))?;

    let columns: Vec<String> = reader
        .headers()
        .with_context(|| format!("read snapshot header {}", path.display()))?
        .iter()
        .map(|cell| cell.trim_start_matches('\u{feff}').trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record.with_context(|| format!("read snapshot row {}", path.display()))?);
    }
    Ok(Snapshot { columns, rows })
}

impl Snapshot {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Data rows in file order.
    pub fn rows(&self) -> impl Iterator<Item = SnapshotRow<'_>> {
        self.rows.iter().map(|record| SnapshotRow {
            columns: &self.columns,
            record,
        })
    }
}

/// One data row viewed through the snapshot's header.
pub struct SnapshotRow<'a> {
    columns: &'a [String],
    record: &'a StringRecord,
}

impl SnapshotRow<'_> {
    /// Cell under `column`, trimmed; empty when the column is absent.
    pub fn field(&self, column: &str) -> &str {
        self.columns
            .iter()
            .position(|c| c == column)
            .and_then(|index| self.record.get(index))
            .unwrap_or("")
            .trim()
    }

    /// Cell under `column` when present and non-empty.
    pub fn optional(&self, column: &str) -> Option<&str> {
        Some(self.field(column)).filter(|value| !value.is_empty())
    }
}
