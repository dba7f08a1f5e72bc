//! Canonical table builder: the engine's single output artifact.

use std::collections::BTreeMap;

use countryref_model::{CountryEntity, CountryRecord, FieldName, ReconcileWarning};

/// Order the final entity sequence and strip internal-only fields.
///
/// Ordering is by canonical name, case-insensitive, with the exact name as
/// a stable tiebreaker. ISO code uniqueness is checked here because it is a
/// property of the whole table, not of any single entity; violations are
/// warnings and both entities are kept (silently dropping either would
/// break regenerability).
pub fn build_table(entities: &[CountryEntity]) -> (Vec<CountryRecord>, Vec<ReconcileWarning>) {
    let mut ordered: Vec<&CountryEntity> = entities.iter().collect();
    ordered.sort_by(|a, b| {
        (a.canonical_name.to_lowercase(), &a.canonical_name)
            .cmp(&(b.canonical_name.to_lowercase(), &b.canonical_name))
    });

    let mut warnings = Vec::new();
    for field in [FieldName::Iso2, FieldName::Iso3, FieldName::IsoNumeric] {
        warnings.extend(check_unique(field, &ordered));
    }

    let records = ordered.into_iter().map(CountryRecord::from).collect();
    (records, warnings)
}

/// Report values of `field` resolved for more than one entity.
fn check_unique(field: FieldName, ordered: &[&CountryEntity]) -> Vec<ReconcileWarning> {
    let mut by_value: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for entity in ordered {
        let value = match field {
            FieldName::Iso2 => entity.iso2.as_deref(),
            FieldName::Iso3 => entity.iso3.as_deref(),
            FieldName::IsoNumeric => entity.iso_numeric.as_deref(),
            _ => None,
        };
        if let Some(value) = value
            && !value.is_empty()
        {
            by_value
                .entry(value)
                .or_default()
                .push(&entity.canonical_name);
        }
    }

    by_value
        .into_iter()
        .filter(|(_, names)| names.len() > 1)
        .map(|(value, names)| ReconcileWarning::CodeCollision {
            field,
            value: value.to_string(),
            entities: names.iter().map(|name| (*name).to_string()).collect(),
        })
        .collect()
}
