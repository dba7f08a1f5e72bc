//! Adapter for the UN statistics snapshot.
//!
//! Snapshot schema: `iso_numeric,name,formal_name,iso3`. The UN list
//! carries a handful of entries (Channel Islands, Sark) that have no ISO
//! alpha codes and no dialing code anywhere; those are skipped up front.

use std::path::Path;

use anyhow::Result;
use tracing::debug;

use countryref_model::{FieldName, FieldValue, RawFieldValue, SourceId};

use crate::snapshot::read_snapshot;

/// ISO numeric codes of UN rows that no other source can enrich.
const SKIP_ISO_NUMERIC: &[&str] = &[
    "830", // Channel Islands
    "680", // Sark
];

/// Read the UN snapshot into raw field observations, in file order.
pub fn read_un_snapshot(path: &Path) -> Result<Vec<RawFieldValue>> {
    let snapshot = read_snapshot(path)?;
    let mut raw_values = Vec::new();
    for row in snapshot.rows() {
        let iso_numeric = row.field("iso_numeric");
        if SKIP_ISO_NUMERIC.contains(&iso_numeric) {
            debug!(iso_numeric = %iso_numeric, "skipping un row on the skip list");
            continue;
        }
        let name = row.field("name");
        if name.is_empty() {
            continue;
        }
        raw_values.push(RawFieldValue::new(
            SourceId::Un,
            name,
            FieldName::Name,
            FieldValue::text(name),
        ));
        if let Some(formal) = row.optional("formal_name") {
            raw_values.push(RawFieldValue::new(
                SourceId::Un,
                name,
                FieldName::FormalName,
                FieldValue::text(formal),
            ));
        }
        if !iso_numeric.is_empty() {
            raw_values.push(RawFieldValue::new(
                SourceId::Un,
                name,
                FieldName::IsoNumeric,
                FieldValue::text(iso_numeric),
            ));
        }
        if let Some(iso3) = row.optional("iso3") {
            raw_values.push(RawFieldValue::new(
                SourceId::Un,
                name,
                FieldName::Iso3,
                FieldValue::text(iso3),
            ));
        }
    }
    debug!(rows = snapshot.len(), observations = raw_values.len(), "read un snapshot");
    Ok(raw_values)
}
