//! Entity merger: groups raw observations by canonical entity key.
//!
//! Nothing is resolved here. The merger only partitions the observation
//! stream into one shell per entity, preserving first-seen order of both
//! entities and per-field candidates so conflict resolution downstream is
//! reproducible.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use countryref_model::{FieldName, FieldValue, RawFieldValue, SourceId};

use crate::normalizer::NameNormalizer;

/// All observations for one entity, grouped by field, unresolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityShell {
    /// Canonical entity key from the normalizer.
    pub key: String,
    /// Candidate values per field, in input order.
    pub candidates: BTreeMap<FieldName, Vec<(SourceId, FieldValue)>>,
    /// Every raw spelling observed for this entity, in observation order.
    pub reported_names: Vec<String>,
}

impl EntityShell {
    fn new(key: String) -> Self {
        Self {
            key,
            candidates: BTreeMap::new(),
            reported_names: Vec::new(),
        }
    }

    /// Candidates for one field (empty slice when no source supplied it).
    pub fn field_candidates(&self, field: FieldName) -> &[(SourceId, FieldValue)] {
        self.candidates.get(&field).map_or(&[], Vec::as_slice)
    }

    /// Alternate spellings: every reported name, deduplicated.
    pub fn aliases(&self) -> BTreeSet<String> {
        self.reported_names.iter().cloned().collect()
    }
}

/// Group the full ordered observation sequence into one shell per entity.
///
/// Aliases pointing at the same canonical key land in the same shell, so
/// the merger can never emit two shells for one entity.
pub fn merge(normalizer: &NameNormalizer, raw_values: &[RawFieldValue]) -> Vec<EntityShell> {
    let mut shells: Vec<EntityShell> = Vec::new();
    let mut index_by_key: HashMap<String, usize> = HashMap::new();

    for raw in raw_values {
        let key = normalizer.normalize(&raw.reported_name);
        let index = match index_by_key.get(&key) {
            Some(index) => *index,
            None => {
                let index = shells.len();
                index_by_key.insert(key.clone(), index);
                shells.push(EntityShell::new(key));
                index
            }
        };
        let shell = &mut shells[index];
        if !shell.reported_names.contains(&raw.reported_name) {
            shell.reported_names.push(raw.reported_name.clone());
        }
        shell
            .candidates
            .entry(raw.field)
            .or_default()
            .push((raw.source, raw.value.clone()));
    }

    shells
}
