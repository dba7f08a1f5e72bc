//! Shared-IDC disambiguation: region-slot assignment.
//!
//! Countries sharing one international dialing code (the NANP group under
//! "1", but also e.g. Italy and the Holy See under "39") are individually
//! identifiable only by their allotted area codes. Each member of such a
//! group receives a slot letter so downstream consumers can address them
//! unambiguously.
//!
//! Assignment is sort-and-enumerate, never a free-running counter: group
//! members are ordered by a fixed key (entities with area codes first, then
//! canonical name case-insensitively, then lowest numeric area code) and
//! lettered A, B, C, ... in that order. Adding a new member with a new
//! disjoint area-code set therefore never reshuffles letters of members
//! that sort ahead of it, and identical inputs always produce identical
//! slots.

use std::collections::BTreeMap;

use countryref_model::{CountryEntity, ReconcileWarning};
use tracing::debug;

/// Assign `region_slot` letters within every shared-IDC group.
///
/// Entities with a unique IDC (or none) are untouched apart from enforcing
/// the invariant that only slotted entities carry area codes. Returns the
/// loud warnings for groups whose members cannot be told apart.
pub fn assign_region_slots(entities: &mut [CountryEntity]) -> Vec<ReconcileWarning> {
    let mut warnings = Vec::new();

    // BTreeMap keyed on the IDC keeps group processing order independent of
    // entity iteration order.
    let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (index, entity) in entities.iter().enumerate() {
        if let Some(idc) = entity.idc.as_deref()
            && !idc.is_empty()
        {
            groups.entry(idc.to_string()).or_default().push(index);
        }
    }

    for (idc, mut members) in groups {
        if members.len() < 2 {
            // Unique IDC: no slot, and area codes are meaningless here.
            let index = members[0];
            if !entities[index].area_codes.is_empty() {
                debug!(
                    entity = %entities[index].canonical_name,
                    idc = %idc,
                    "dropping area codes for entity with unique idc"
                );
                entities[index].area_codes.clear();
            }
            continue;
        }

        members.sort_by(|&a, &b| sort_key(&entities[a]).cmp(&sort_key(&entities[b])));

        for (position, &index) in members.iter().enumerate() {
            entities[index].region_slot = Some(slot_letter(position));
        }

        warnings.extend(detect_collisions(&idc, entities, &members));
    }

    warnings
}

/// Fixed ordering key: empty-code entities are least specific and sort
/// last; ties break by name (case-insensitive, then exact) and lowest code.
fn sort_key(entity: &CountryEntity) -> (bool, String, u32, String) {
    (
        entity.area_codes.is_empty(),
        entity.canonical_name.to_lowercase(),
        entity.lowest_area_code().unwrap_or(u32::MAX),
        entity.canonical_name.clone(),
    )
}

/// Two group members with identical non-empty area-code sets are a genuine
/// upstream defect: the codes no longer distinguish them. Both keep their
/// (distinct) slots; the defect is surfaced loudly and the build goes on.
fn detect_collisions(
    idc: &str,
    entities: &[CountryEntity],
    members: &[usize],
) -> Vec<ReconcileWarning> {
    let mut by_code_set: BTreeMap<Vec<String>, Vec<String>> = BTreeMap::new();
    for &index in members {
        let entity = &entities[index];
        if entity.area_codes.is_empty() {
            continue;
        }
        let mut codes = entity.area_codes.clone();
        codes.sort();
        by_code_set
            .entry(codes)
            .or_default()
            .push(entity.canonical_name.clone());
    }

    by_code_set
        .into_iter()
        .filter(|(_, names)| names.len() > 1)
        .map(|(codes, names)| ReconcileWarning::SlotCollision {
            idc: idc.to_string(),
            area_codes: codes,
            entities: names,
        })
        .collect()
}

/// Slot letter for a zero-based position: A..Z, then AA, AB, ...
fn slot_letter(position: usize) -> String {
    let mut letters = Vec::new();
    let mut remaining = position;
    loop {
        letters.push(char::from(b'A' + (remaining % 26) as u8));
        remaining /= 26;
        if remaining == 0 {
            break;
        }
        remaining -= 1;
    }
    letters.iter().rev().collect()
}
