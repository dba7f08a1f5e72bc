//! Completeness filter: optionally drop entities with no dialing code.

use countryref_model::CountryEntity;
use tracing::debug;

/// Remove every entity without a resolved IDC when `drop_if_missing_idc`
/// is set; pass everything through otherwise.
///
/// Completeness is judged solely on IDC presence: entities with an IDC but
/// no area codes or region slot are retained. Idempotent by construction.
pub fn filter_missing_idc(
    entities: Vec<CountryEntity>,
    drop_if_missing_idc: bool,
) -> Vec<CountryEntity> {
    if !drop_if_missing_idc {
        return entities;
    }
    entities
        .into_iter()
        .filter(|entity| {
            let keep = entity.has_idc();
            if !keep {
                debug!(entity = %entity.canonical_name, "dropping entity with no idc");
            }
            keep
        })
        .collect()
}
