//! Whole-pipeline properties: determinism and the completeness filter.

use countryref_core::{ReconcileOptions, reconcile};
use countryref_model::{FieldName, FieldValue, RawFieldValue, SourceId};

fn fixture() -> Vec<RawFieldValue> {
    let text = |source, name: &str, field, value: &str| {
        RawFieldValue::new(source, name, field, FieldValue::text(value))
    };
    vec![
        text(SourceId::Un, "Viet Nam", FieldName::Name, "Viet Nam"),
        text(SourceId::Un, "Viet Nam", FieldName::Iso3, "VNM"),
        text(SourceId::Un, "Bahamas", FieldName::Name, "Bahamas"),
        text(SourceId::Un, "Canada", FieldName::Name, "Canada"),
        text(SourceId::Un, "Sark", FieldName::Name, "Sark"),
        text(SourceId::WorldAtlas, "Vietnam", FieldName::Iso2, "VN"),
        text(SourceId::WorldAtlas, "Vietnam", FieldName::IsoNumeric, "704"),
        text(SourceId::Wikipedia, "VIETNAM", FieldName::Idc, "84"),
        text(SourceId::Wikipedia, "BAHAMAS", FieldName::Idc, "1"),
        RawFieldValue::new(
            SourceId::Wikipedia,
            "BAHAMAS",
            FieldName::AreaCodes,
            FieldValue::codes(["242"]),
        ),
        text(SourceId::Wikipedia, "CANADA", FieldName::Idc, "1"),
    ]
}

/// Two runs over the same input are indistinguishable, warnings included.
#[test]
fn engine_is_deterministic() {
    let raws = fixture();
    let options = ReconcileOptions::default();
    let first = reconcile(&raws, &options);
    let second = reconcile(&raws, &options);
    assert_eq!(first.records, second.records);
    assert_eq!(first.warnings, second.warnings);
    assert_eq!(first.stats, second.stats);
}

/// The filtered table is a strict subset (by entity) of the unfiltered one.
#[test]
fn completeness_filter_yields_entity_subset() {
    let raws = fixture();
    let all = reconcile(&raws, &ReconcileOptions::default());
    let filtered = reconcile(
        &raws,
        &ReconcileOptions {
            drop_missing_idc: true,
        },
    );

    assert!(filtered.records.len() < all.records.len());
    for record in &filtered.records {
        assert!(
            all.records.iter().any(|other| other.name == record.name),
            "{} missing from unfiltered table",
            record.name
        );
        assert!(record.idc.as_deref().is_some_and(|idc| !idc.is_empty()));
    }
    // Sark has no dialing data and is the entity the filter removes.
    assert!(all.records.iter().any(|r| r.name == "Sark"));
    assert!(!filtered.records.iter().any(|r| r.name == "Sark"));
}

/// Entities with an IDC but no area codes or slot survive the filter.
#[test]
fn filter_judges_idc_presence_only() {
    let raws = vec![
        RawFieldValue::new(
            SourceId::Un,
            "Vietnam",
            FieldName::Name,
            FieldValue::text("Vietnam"),
        ),
        RawFieldValue::new(
            SourceId::Wikipedia,
            "Vietnam",
            FieldName::Idc,
            FieldValue::text("84"),
        ),
    ];
    let outcome = reconcile(
        &raws,
        &ReconcileOptions {
            drop_missing_idc: true,
        },
    );
    assert_eq!(outcome.records.len(), 1);
    assert!(outcome.records[0].region_slot.is_none());
}

/// The final table is ordered by name, case-insensitive.
#[test]
fn records_come_out_name_ordered() {
    let raws = fixture();
    let outcome = reconcile(&raws, &ReconcileOptions::default());
    let names: Vec<String> = outcome
        .records
        .iter()
        .map(|r| r.name.to_lowercase())
        .collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}
