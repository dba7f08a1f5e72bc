//! Adapter for the Wikipedia dialing-code snapshot.
//!
//! Snapshot schema: `name,dialing` where `dialing` is the raw cell text
//! from the dialing-code table (`+84`, `+1 242`, `+1 809, +1 829`, ...).

use std::path::Path;

use anyhow::Result;
use tracing::debug;

use countryref_model::{FieldName, FieldValue, RawFieldValue, SourceId};

use crate::dialing::parse_dialing;
use crate::snapshot::read_snapshot;

/// Dialing cells replaced wholesale before parsing.
///
/// The Vatican is assigned +379 upstream but does not use it; real traffic
/// goes through the Rome 06698 exchange, so the entry is patched to the
/// numbers that actually work.
const DIALING_OVERRIDES: &[(&str, &str)] = &[
    ("VATICAN CITY STATE (HOLY SEE)", "+39 066"),
    ("HOLY SEE (VATICAN CITY STATE)", "+39 066"),
];

/// Read the Wikipedia snapshot into raw field observations, in file order.
pub fn read_wikipedia_snapshot(path: &Path) -> Result<Vec<RawFieldValue>> {
    let snapshot = read_snapshot(path)?;
    let mut raw_values = Vec::new();
    for row in snapshot.rows() {
        let name = row.field("name");
        if name.is_empty() {
            continue;
        }
        let mut dialing = row.field("dialing");
        if let Some((_, patched)) = DIALING_OVERRIDES
            .iter()
            .find(|(entry, _)| entry.eq_ignore_ascii_case(name))
        {
            debug!(name = %name, "applying dialing override");
            dialing = *patched;
        }

        raw_values.push(RawFieldValue::new(
            SourceId::Wikipedia,
            name,
            FieldName::Name,
            FieldValue::text(name),
        ));
        let Some(numbers) = parse_dialing(dialing) else {
            debug!(name = %name, cell = %dialing, "no usable dialing entry");
            continue;
        };
        raw_values.push(RawFieldValue::new(
            SourceId::Wikipedia,
            name,
            FieldName::Idc,
            FieldValue::text(numbers.idc),
        ));
        if !numbers.area_codes.is_empty() {
            raw_values.push(RawFieldValue::new(
                SourceId::Wikipedia,
                name,
                FieldName::AreaCodes,
                FieldValue::codes(numbers.area_codes),
            ));
        }
    }
    debug!(rows = snapshot.len(), observations = raw_values.len(), "read wikipedia snapshot");
    Ok(raw_values)
}
