//! Round-trip and cross-format equivalence of the serializers.

use countryref_model::CountryRecord;
use countryref_output::{header, to_csv_string, to_json_value};

fn sample_records() -> Vec<CountryRecord> {
    vec![
        CountryRecord {
            name: "Bahamas".to_string(),
            formal_name: Some("Commonwealth of the Bahamas".to_string()),
            iso2: Some("BS".to_string()),
            iso3: Some("BHS".to_string()),
            iso_numeric: Some("044".to_string()),
            idc: Some("1".to_string()),
            region_slot: Some("A".to_string()),
            area_codes: vec!["242".to_string()],
        },
        CountryRecord {
            name: "Dominican Republic".to_string(),
            formal_name: None,
            iso2: Some("DO".to_string()),
            iso3: Some("DOM".to_string()),
            iso_numeric: Some("214".to_string()),
            idc: Some("1".to_string()),
            region_slot: Some("B".to_string()),
            area_codes: vec!["809".to_string(), "829".to_string(), "849".to_string()],
        },
        CountryRecord {
            name: "Sark".to_string(),
            ..CountryRecord::default()
        },
    ]
}

/// Reading the serialized CSV back reproduces the record sequence
/// field-for-field.
#[test]
fn csv_round_trips_through_the_same_reader() {
    let records = sample_records();
    let csv_text = to_csv_string(&records).expect("serialize csv");

    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
    let headers = reader.headers().expect("headers").clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        header(&records).iter().map(String::as_str).collect::<Vec<_>>()
    );

    let rows: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("read rows");
    assert_eq!(rows.len(), records.len());

    for (row, record) in rows.iter().zip(&records) {
        let get = |column: &str| {
            let index = headers.iter().position(|h| h == column).expect("column");
            row.get(index).unwrap_or("")
        };
        assert_eq!(get("name"), record.name);
        assert_eq!(get("formal_name"), record.formal_name.as_deref().unwrap_or(""));
        assert_eq!(get("iso2"), record.iso2.as_deref().unwrap_or(""));
        assert_eq!(get("iso3"), record.iso3.as_deref().unwrap_or(""));
        assert_eq!(get("iso_numeric"), record.iso_numeric.as_deref().unwrap_or(""));
        assert_eq!(get("idc"), record.idc.as_deref().unwrap_or(""));
        assert_eq!(get("region_slot"), record.region_slot.as_deref().unwrap_or(""));
        for (index, code) in record.area_codes.iter().enumerate() {
            let column = countryref_output::region_column_name(index);
            assert_eq!(get(&column), code);
        }
    }
}

/// CSV and JSON rows carry the same keys and equivalent values, with
/// absence encoded as empty string and null respectively.
#[test]
fn csv_and_json_are_field_equivalent() {
    let records = sample_records();
    let csv_text = to_csv_string(&records).expect("serialize csv");
    let json = to_json_value(&records);

    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
    let headers = reader.headers().expect("headers").clone();
    let rows: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("read rows");

    let objects = json.as_array().expect("array");
    assert_eq!(objects.len(), rows.len());

    for (row, object) in rows.iter().zip(objects) {
        let object = object.as_object().expect("object");
        assert_eq!(object.len(), headers.len());
        for (index, column) in headers.iter().enumerate() {
            let csv_cell = row.get(index).unwrap_or("");
            match &object[column] {
                serde_json::Value::Null => assert_eq!(csv_cell, "", "column {column}"),
                serde_json::Value::String(text) => assert_eq!(csv_cell, text, "column {column}"),
                other => panic!("unexpected json value in {column}: {other}"),
            }
        }
    }
}

/// Serialization is a pure function of the record list.
#[test]
fn serializers_are_deterministic() {
    let records = sample_records();
    assert_eq!(
        to_csv_string(&records).expect("csv once"),
        to_csv_string(&records).expect("csv twice")
    );
    assert_eq!(to_json_value(&records), to_json_value(&records));
}
