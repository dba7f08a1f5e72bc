//! Column layout shared by the CSV and JSON serializers.
//!
//! Both serializers emit the same flat keys: the seven fixed fields plus
//! one `region_*_code` column per allotted area code, up to the widest
//! group observed in the table being written. Serializing different tables
//! can therefore produce different column counts; serializing the same
//! table always produces the same layout.

use countryref_model::CountryRecord;

/// Fixed leading columns, in output order.
pub const FIXED_COLUMNS: [&str; 7] = [
    "name",
    "formal_name",
    "iso2",
    "iso3",
    "iso_numeric",
    "idc",
    "region_slot",
];

/// Widest area-code set in the table; determines the region column count.
pub fn max_region_codes(records: &[CountryRecord]) -> usize {
    records
        .iter()
        .map(|record| record.area_codes.len())
        .max()
        .unwrap_or(0)
}

/// Name of the region-code column at `index`: `region_a_code`,
/// `region_b_code`, ... then `region_aa_code` past the alphabet.
pub fn region_column_name(index: usize) -> String {
    let mut letters = Vec::new();
    let mut remaining = index;
    loop {
        letters.push(char::from(b'a' + (remaining % 26) as u8));
        remaining /= 26;
        if remaining == 0 {
            break;
        }
        remaining -= 1;
    }
    let letters: String = letters.iter().rev().collect();
    format!("region_{letters}_code")
}

/// Full header: fixed columns followed by the region-code columns.
pub fn header(records: &[CountryRecord]) -> Vec<String> {
    let mut columns: Vec<String> = FIXED_COLUMNS.iter().map(|c| (*c).to_string()).collect();
    for index in 0..max_region_codes(records) {
        columns.push(region_column_name(index));
    }
    columns
}

/// One record flattened into optional cell values matching [`header`].
pub fn flatten(record: &CountryRecord, region_columns: usize) -> Vec<Option<String>> {
    let mut cells = vec![
        Some(record.name.clone()),
        record.formal_name.clone(),
        record.iso2.clone(),
        record.iso3.clone(),
        record.iso_numeric.clone(),
        record.idc.clone(),
        record.region_slot.clone(),
    ];
    for index in 0..region_columns {
        cells.push(record.area_codes.get(index).cloned());
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_column_names_follow_the_alphabet() {
        assert_eq!(region_column_name(0), "region_a_code");
        assert_eq!(region_column_name(3), "region_d_code");
        assert_eq!(region_column_name(26), "region_aa_code");
    }

    #[test]
    fn header_width_tracks_the_widest_group() {
        let wide = CountryRecord {
            area_codes: vec!["809".into(), "829".into(), "849".into()],
            ..CountryRecord::default()
        };
        let narrow = CountryRecord::default();
        let header = header(&[narrow, wide]);
        assert_eq!(header.len(), FIXED_COLUMNS.len() + 3);
        assert_eq!(header.last().map(String::as_str), Some("region_c_code"));
    }

    #[test]
    fn flatten_pads_missing_codes() {
        let record = CountryRecord {
            name: "Bahamas".into(),
            area_codes: vec!["242".into()],
            ..CountryRecord::default()
        };
        let cells = flatten(&record, 3);
        assert_eq!(cells.len(), FIXED_COLUMNS.len() + 3);
        assert_eq!(cells[7].as_deref(), Some("242"));
        assert_eq!(cells[8], None);
        assert_eq!(cells[9], None);
    }
}
