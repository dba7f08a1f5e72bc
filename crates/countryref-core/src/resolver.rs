//! Conflict resolver: one candidate list in, one value per field out.
//!
//! Runs once per entity with no ordering dependency between entities.
//! A field supplied by exactly one source is taken unconditionally; a field
//! supplied by nobody stays absent (a data gap, not an error); agreeing
//! sources record no conflict. Only genuine disagreements consult the
//! precedence tables, keep the winner, and record the losers as a
//! warning-level provenance note.

use countryref_model::{
    CountryEntity, FieldName, FieldValue, RawFieldValue, ReconcileWarning, SourceId,
};

use crate::merger::EntityShell;
use crate::normalizer::NameNormalizer;
use crate::precedence::rank;

/// Resolve every field of one entity shell.
pub fn resolve(
    normalizer: &NameNormalizer,
    shell: &EntityShell,
    warnings: &mut Vec<ReconcileWarning>,
) -> CountryEntity {
    let mut entity = CountryEntity::default();

    // Resolve the display name first so conflict warnings can name the
    // entity they concern.
    let name_outcome = pick(shell, FieldName::Name);
    let resolved_name = match &name_outcome {
        Some(outcome) => {
            entity.provenance.insert(FieldName::Name, outcome.winner);
            outcome.value.as_text().unwrap_or(&shell.key).to_string()
        }
        // No source reported a name field; fall back to the first raw
        // spelling observed.
        None => shell
            .reported_names
            .first()
            .cloned()
            .unwrap_or_else(|| shell.key.clone()),
    };
    entity.canonical_name = match normalizer.display_override(&resolved_name) {
        Some(preferred) => preferred.to_string(),
        None => resolved_name,
    };
    if let Some(outcome) = name_outcome {
        record_conflict(&outcome, FieldName::Name, &entity.canonical_name, warnings);
    }

    entity.formal_name = resolve_text(shell, FieldName::FormalName, &mut entity, warnings);
    entity.iso2 = resolve_text(shell, FieldName::Iso2, &mut entity, warnings);
    entity.iso3 = resolve_text(shell, FieldName::Iso3, &mut entity, warnings);
    entity.iso_numeric = resolve_text(shell, FieldName::IsoNumeric, &mut entity, warnings);
    entity.idc = resolve_text(shell, FieldName::Idc, &mut entity, warnings);

    if let Some(outcome) = pick_with_warning(shell, FieldName::AreaCodes, &entity.canonical_name, warnings) {
        entity.provenance.insert(FieldName::AreaCodes, outcome.winner);
        entity.area_codes = match outcome.value {
            FieldValue::Codes(codes) => codes,
            FieldValue::Text(code) => vec![code],
        };
    }

    entity.aliases = shell.aliases();
    entity.aliases.remove(&entity.canonical_name);
    entity
}

fn resolve_text(
    shell: &EntityShell,
    field: FieldName,
    entity: &mut CountryEntity,
    warnings: &mut Vec<ReconcileWarning>,
) -> Option<String> {
    let outcome = pick_with_warning(shell, field, &entity.canonical_name, warnings)?;
    entity.provenance.insert(field, outcome.winner);
    Some(outcome.value.as_text().unwrap_or_default().to_string()).filter(|v| !v.is_empty())
}

struct PickOutcome {
    winner: SourceId,
    value: FieldValue,
    losers: Vec<(SourceId, FieldValue)>,
}

/// Select the winning candidate for a field by authority precedence.
fn pick(shell: &EntityShell, field: FieldName) -> Option<PickOutcome> {
    let candidates = shell.field_candidates(field);
    if candidates.is_empty() {
        return None;
    }

    // Distinct values in input order, each tagged with the best-ranked
    // source among all of its suppliers. A value confirmed by the
    // authoritative source must carry that source's rank even when a
    // lower-ranked source reported it first.
    let mut distinct: Vec<(SourceId, FieldValue)> = Vec::new();
    for (source, value) in candidates {
        match distinct.iter_mut().find(|(_, seen)| *seen == *value) {
            Some((best, _)) => {
                if rank(field.family(), *source) < rank(field.family(), *best) {
                    *best = *source;
                }
            }
            None => distinct.push((*source, value.clone())),
        }
    }

    let winner_index = distinct
        .iter()
        .enumerate()
        .min_by_key(|(position, (source, _))| (rank(field.family(), *source), *position))
        .map(|(position, _)| position)?;
    let (winner, value) = distinct.remove(winner_index);

    Some(PickOutcome {
        winner,
        value,
        losers: distinct,
    })
}

/// Like [`pick`], recording a [`ReconcileWarning::FieldConflict`] when more
/// than one distinct value was supplied.
fn pick_with_warning(
    shell: &EntityShell,
    field: FieldName,
    entity_name: &str,
    warnings: &mut Vec<ReconcileWarning>,
) -> Option<PickOutcome> {
    let outcome = pick(shell, field)?;
    record_conflict(&outcome, field, entity_name, warnings);
    Some(outcome)
}

fn record_conflict(
    outcome: &PickOutcome,
    field: FieldName,
    entity_name: &str,
    warnings: &mut Vec<ReconcileWarning>,
) {
    if outcome.losers.is_empty() {
        return;
    }
    warnings.push(ReconcileWarning::FieldConflict {
        entity: entity_name.to_string(),
        field,
        winner: outcome.winner,
        winning_value: outcome.value.to_string(),
        losers: outcome
            .losers
            .iter()
            .map(|(source, value)| (*source, value.to_string()))
            .collect(),
    });
}

/// Convenience for tests and small callers: merge and resolve in one step.
pub fn resolve_all(
    normalizer: &NameNormalizer,
    raw_values: &[RawFieldValue],
) -> (Vec<CountryEntity>, Vec<ReconcileWarning>) {
    let shells = crate::merger::merge(normalizer, raw_values);
    let mut warnings = Vec::new();
    let entities = shells
        .iter()
        .map(|shell| resolve(normalizer, shell, &mut warnings))
        .collect();
    (entities, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use countryref_model::RawFieldValue;

    fn raw(source: SourceId, name: &str, field: FieldName, value: &str) -> RawFieldValue {
        RawFieldValue::new(source, name, field, FieldValue::text(value))
    }

    #[test]
    fn single_source_field_wins_unconditionally() {
        // WorldAtlas ranks below UN, but it is the only supplier here.
        let normalizer = NameNormalizer::new();
        let raws = vec![
            raw(SourceId::WorldAtlas, "Vietnam", FieldName::Name, "Viet Nam"),
            raw(SourceId::WorldAtlas, "Vietnam", FieldName::IsoNumeric, "704"),
        ];
        let (entities, warnings) = resolve_all(&normalizer, &raws);
        assert_eq!(entities[0].iso_numeric.as_deref(), Some("704"));
        assert!(warnings.is_empty());
    }

    #[test]
    fn un_wins_iso_code_disagreements_and_losers_are_recorded() {
        let normalizer = NameNormalizer::new();
        let raws = vec![
            raw(SourceId::WorldAtlas, "Romania", FieldName::Iso3, "ROM"),
            raw(SourceId::Un, "Romania", FieldName::Iso3, "ROU"),
        ];
        let (entities, warnings) = resolve_all(&normalizer, &raws);
        assert_eq!(entities[0].iso3.as_deref(), Some("ROU"));
        assert_eq!(entities[0].provenance[&FieldName::Iso3], SourceId::Un);
        assert_eq!(warnings.len(), 1);
        match &warnings[0] {
            ReconcileWarning::FieldConflict { winner, losers, .. } => {
                assert_eq!(*winner, SourceId::Un);
                assert_eq!(losers, &[(SourceId::WorldAtlas, "ROM".to_string())]);
            }
            other => panic!("unexpected warning: {other:?}"),
        }
    }

    #[test]
    fn agreeing_sources_record_no_conflict() {
        let normalizer = NameNormalizer::new();
        let raws = vec![
            raw(SourceId::Un, "France", FieldName::Iso2, "FR"),
            raw(SourceId::WorldAtlas, "France", FieldName::Iso2, "FR"),
        ];
        let (entities, warnings) = resolve_all(&normalizer, &raws);
        assert_eq!(entities[0].iso2.as_deref(), Some("FR"));
        assert!(warnings.is_empty());
    }

    #[test]
    fn absent_fields_stay_absent() {
        let normalizer = NameNormalizer::new();
        let raws = vec![raw(SourceId::Un, "Kiribati", FieldName::Name, "Kiribati")];
        let (entities, _) = resolve_all(&normalizer, &raws);
        let entity = &entities[0];
        assert!(entity.iso2.is_none());
        assert!(entity.idc.is_none());
        assert!(entity.area_codes.is_empty());
    }

    #[test]
    fn viet_nam_resolves_to_vietnam_display_name() {
        let normalizer = NameNormalizer::new();
        let raws = vec![raw(SourceId::Un, "Viet Nam", FieldName::Name, "Viet Nam")];
        let (entities, _) = resolve_all(&normalizer, &raws);
        assert_eq!(entities[0].canonical_name, "Vietnam");
    }

    #[test]
    fn confirmed_value_carries_its_best_ranked_supplier() {
        // UN reports "84" first, the authoritative dialing source confirms
        // it, and a mid-ranked source disagrees. The confirmed value must
        // win with the dialing source recorded as its provenance.
        let normalizer = NameNormalizer::new();
        let raws = vec![
            raw(SourceId::Un, "Vietnam", FieldName::Idc, "84"),
            raw(SourceId::Wikipedia, "Vietnam", FieldName::Idc, "84"),
            raw(SourceId::WorldAtlas, "Vietnam", FieldName::Idc, "85"),
        ];
        let (entities, warnings) = resolve_all(&normalizer, &raws);
        assert_eq!(entities[0].idc.as_deref(), Some("84"));
        assert_eq!(entities[0].provenance[&FieldName::Idc], SourceId::Wikipedia);
        assert_eq!(warnings.len(), 1);
        match &warnings[0] {
            ReconcileWarning::FieldConflict { winner, losers, .. } => {
                assert_eq!(*winner, SourceId::Wikipedia);
                assert_eq!(losers, &[(SourceId::WorldAtlas, "85".to_string())]);
            }
            other => panic!("unexpected warning: {other:?}"),
        }
    }

    #[test]
    fn dialing_source_wins_idc() {
        let normalizer = NameNormalizer::new();
        let raws = vec![
            raw(SourceId::WorldAtlas, "Vietnam", FieldName::Idc, "850"),
            raw(SourceId::Wikipedia, "Vietnam", FieldName::Idc, "84"),
        ];
        let (entities, warnings) = resolve_all(&normalizer, &raws);
        assert_eq!(entities[0].idc.as_deref(), Some("84"));
        assert_eq!(warnings.len(), 1);
    }
}
