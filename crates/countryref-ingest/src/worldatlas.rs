//! Adapter for the WorldAtlas country-code snapshot.
//!
//! Snapshot schema: `iso2,iso3,iso_numeric,name`. WorldAtlas is the widest
//! of the three sources and the only one carrying ISO alpha-2 codes for
//! every entry, but it is known to disagree with the UN on a few alpha-3
//! codes; precedence downstream settles those.

use std::path::Path;

use anyhow::Result;
use tracing::debug;

use countryref_model::{FieldName, FieldValue, RawFieldValue, SourceId};

use crate::snapshot::read_snapshot;

/// Read the WorldAtlas snapshot into raw field observations, in file order.
pub fn read_worldatlas_snapshot(path: &Path) -> Result<Vec<RawFieldValue>> {
    let snapshot = read_snapshot(path)?;
    let mut raw_values = Vec::new();
    for row in snapshot.rows() {
        let name = row.field("name");
        if name.is_empty() {
            continue;
        }
        raw_values.push(RawFieldValue::new(
            SourceId::WorldAtlas,
            name,
            FieldName::Name,
            FieldValue::text(name),
        ));
        for (column, field) in [
            ("iso2", FieldName::Iso2),
            ("iso3", FieldName::Iso3),
            ("iso_numeric", FieldName::IsoNumeric),
        ] {
            if let Some(value) = row.optional(column) {
                raw_values.push(RawFieldValue::new(
                    SourceId::WorldAtlas,
                    name,
                    field,
                    FieldValue::text(value),
                ));
            }
        }
    }
    debug!(rows = snapshot.len(), observations = raw_values.len(), "read worldatlas snapshot");
    Ok(raw_values)
}
