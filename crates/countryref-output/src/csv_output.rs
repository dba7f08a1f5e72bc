//! CSV serialization: one header row, one row per entity, empty string
//! for absent fields.

use std::io::Write;

use anyhow::{Context, Result};

use countryref_model::CountryRecord;

use crate::columns::{flatten, header, max_region_codes};

/// Write the canonical table as CSV.
pub fn write_csv<W: Write>(records: &[CountryRecord], writer: W) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(header(records))
        .context("write csv header")?;

    let region_columns = max_region_codes(records);
    for record in records {
        let cells = flatten(record, region_columns);
        out.write_record(cells.iter().map(|cell| cell.as_deref().unwrap_or("")))
            .with_context(|| format!("write csv row: {}", record.name))?;
    }
    out.flush().context("flush csv output")?;
    Ok(())
}

/// The table as a CSV string; convenience for tests and stdout output.
pub fn to_csv_string(records: &[CountryRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(records, &mut buffer)?;
    String::from_utf8(buffer).context("csv output was not utf-8")
}
