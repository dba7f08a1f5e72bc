//! JSON serialization: an array of flat objects.
//!
//! Policy for absent fields: every object carries every key of the CSV
//! layout, with `null` for absent values. This keeps the two serializers
//! field-equivalent (same keys, format-appropriate encoding of absence)
//! rather than silently inconsistent.

use std::io::Write;

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use countryref_model::CountryRecord;

use crate::columns::{flatten, header, max_region_codes};

/// Build the JSON value for the canonical table.
pub fn to_json_value(records: &[CountryRecord]) -> Value {
    let columns = header(records);
    let region_columns = max_region_codes(records);
    let objects: Vec<Value> = records
        .iter()
        .map(|record| {
            let mut object = Map::new();
            for (column, cell) in columns.iter().zip(flatten(record, region_columns)) {
                let value = match cell {
                    Some(text) => Value::String(text),
                    None => Value::Null,
                };
                object.insert(column.clone(), value);
            }
            Value::Object(object)
        })
        .collect();
    Value::Array(objects)
}

/// Write the canonical table as pretty-printed JSON.
pub fn write_json<W: Write>(records: &[CountryRecord], writer: W) -> Result<()> {
    let value = to_json_value(records);
    serde_json::to_writer_pretty(writer, &value).context("write json output")?;
    Ok(())
}

/// The table as a JSON string; convenience for tests and stdout output.
pub fn to_json_string(records: &[CountryRecord]) -> Result<String> {
    let value = to_json_value(records);
    serde_json::to_string_pretty(&value).context("serialize json output")
}
