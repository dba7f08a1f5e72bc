//! Region-slot assignment properties for shared-IDC groups.

use std::collections::BTreeMap;

use countryref_core::assign_region_slots;
use countryref_model::CountryEntity;
use proptest::prelude::*;

fn nanp_entity(name: &str, codes: &[&str]) -> CountryEntity {
    let mut entity = CountryEntity::new(name);
    entity.idc = Some("1".to_string());
    entity.area_codes = codes.iter().map(|c| (*c).to_string()).collect();
    entity
}

fn slots_by_name(entities: &[CountryEntity]) -> BTreeMap<String, Option<String>> {
    entities
        .iter()
        .map(|e| (e.canonical_name.clone(), e.region_slot.clone()))
        .collect()
}

/// Disjoint non-empty code sets always yield pairwise distinct slots.
#[test]
fn disjoint_nanp_members_get_distinct_slots() {
    let mut entities = vec![
        nanp_entity("Jamaica", &["658", "876"]),
        nanp_entity("Bahamas", &["242"]),
        nanp_entity("Dominican Republic", &["809", "829", "849"]),
        nanp_entity("Anguilla", &["264"]),
    ];
    let warnings = assign_region_slots(&mut entities);
    assert!(warnings.is_empty());

    let mut slots: Vec<String> = entities
        .iter()
        .map(|e| e.region_slot.clone().expect("every member slotted"))
        .collect();
    slots.sort();
    slots.dedup();
    assert_eq!(slots.len(), entities.len());
}

/// Adding a member that extends the sorted order leaves existing slots
/// untouched.
#[test]
fn slots_are_stable_under_addition() {
    let mut base = vec![
        nanp_entity("Anguilla", &["264"]),
        nanp_entity("Bahamas", &["242"]),
        nanp_entity("Dominican Republic", &["809", "829"]),
    ];
    assign_region_slots(&mut base);
    let before = slots_by_name(&base);

    let mut superset = vec![
        nanp_entity("Anguilla", &["264"]),
        nanp_entity("Bahamas", &["242"]),
        nanp_entity("Dominican Republic", &["809", "829"]),
        nanp_entity("Jamaica", &["658", "876"]),
    ];
    assign_region_slots(&mut superset);
    let after = slots_by_name(&superset);

    for (name, slot) in &before {
        assert_eq!(after.get(name), Some(slot), "slot moved for {name}");
    }
    assert_eq!(after["Jamaica"].as_deref(), Some("D"));
}

/// Identical input data yields identical slots on every run.
#[test]
fn slots_are_deterministic_across_runs() {
    let build = || {
        let mut entities = vec![
            nanp_entity("Dominican Republic", &["809", "829"]),
            nanp_entity("Canada", &[]),
            nanp_entity("Bahamas", &["242"]),
        ];
        assign_region_slots(&mut entities);
        slots_by_name(&entities)
    };
    assert_eq!(build(), build());
}

proptest! {
    /// Slot assignment is independent of entity iteration order: any
    /// permutation of the same group produces the same name -> slot map.
    #[test]
    fn slots_ignore_input_order(seed in 0usize..24) {
        let mut entities = vec![
            nanp_entity("Anguilla", &["264"]),
            nanp_entity("Bahamas", &["242"]),
            nanp_entity("Canada", &[]),
            nanp_entity("Dominican Republic", &["809", "829"]),
        ];
        // Cheap deterministic permutation from the seed.
        let len = entities.len();
        let mut permuted = Vec::with_capacity(len);
        let mut remaining = entities.drain(..).collect::<Vec<_>>();
        let mut state = seed;
        while !remaining.is_empty() {
            let index = state % remaining.len();
            permuted.push(remaining.remove(index));
            state = state / 3 + 1;
        }

        assign_region_slots(&mut permuted);
        let got = slots_by_name(&permuted);

        let mut reference = vec![
            nanp_entity("Anguilla", &["264"]),
            nanp_entity("Bahamas", &["242"]),
            nanp_entity("Canada", &[]),
            nanp_entity("Dominican Republic", &["809", "829"]),
        ];
        assign_region_slots(&mut reference);
        prop_assert_eq!(got, slots_by_name(&reference));
    }

    /// Every member of a shared-IDC group receives some slot, empty code
    /// set or not, and the empty-set member never sorts ahead of members
    /// with codes.
    #[test]
    fn every_group_member_is_slotted(extra_code in 200u32..999) {
        let mut entities = vec![
            nanp_entity("Zedland", &[]),
            nanp_entity("Aland", &[&extra_code.to_string()]),
        ];
        assign_region_slots(&mut entities);
        prop_assert_eq!(entities[1].region_slot.as_deref(), Some("A"));
        prop_assert_eq!(entities[0].region_slot.as_deref(), Some("B"));
    }
}
