//! The reconciliation pipeline: raw observations in, canonical table out.
//!
//! A single-pass, deterministic batch transform. Given the same ordered
//! observation sequence and options, two runs produce byte-identical
//! output; nothing here blocks, suspends, or keeps state between runs.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use countryref_model::{
    CountryEntity, CountryRecord, RawFieldValue, ReconcileWarning, WarningSeverity,
};

use crate::filter::filter_missing_idc;
use crate::merger::merge;
use crate::normalizer::NameNormalizer;
use crate::resolver::resolve;
use crate::slots::assign_region_slots;
use crate::table::build_table;

/// Engine options wired through from the CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileOptions {
    /// Drop entities whose resolved IDC is empty.
    pub drop_missing_idc: bool,
}

/// Headline counts for the run summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileStats {
    /// Raw observations consumed.
    pub observations: usize,
    /// Entities after merging (before the completeness filter).
    pub entities_merged: usize,
    /// Entities in the final table.
    pub entities_emitted: usize,
    /// Entities with a resolved dialing code.
    pub entities_with_idc: usize,
    /// Entities that received a region slot.
    pub entities_slotted: usize,
    /// Field-level conflicts resolved by precedence.
    pub field_conflicts: usize,
    /// Loud warnings (code collisions, slot collisions).
    pub loud_warnings: usize,
}

/// Everything one engine run produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileOutcome {
    /// The ordered canonical table, ready for serialization.
    pub records: Vec<CountryRecord>,
    /// Resolved entities, internal fields included, for audit.
    pub entities: Vec<CountryEntity>,
    /// Every warning the run produced, in stage order.
    pub warnings: Vec<ReconcileWarning>,
    pub stats: ReconcileStats,
}

/// Run the full engine over an already-materialized observation sequence.
///
/// Pure: no condition here is fatal and no state survives the call.
pub fn reconcile(raw_values: &[RawFieldValue], options: &ReconcileOptions) -> ReconcileOutcome {
    let normalizer = NameNormalizer::new();
    let mut warnings = Vec::new();

    let shells = merge(&normalizer, raw_values);
    info!(
        observations = raw_values.len(),
        entities = shells.len(),
        "merged observations"
    );
    let entities_merged = shells.len();

    let mut entities: Vec<CountryEntity> = shells
        .iter()
        .map(|shell| resolve(&normalizer, shell, &mut warnings))
        .collect();
    let field_conflicts = warnings.len();

    warnings.extend(assign_region_slots(&mut entities));

    let entities = filter_missing_idc(entities, options.drop_missing_idc);

    let (records, table_warnings) = build_table(&entities);
    warnings.extend(table_warnings);

    for warning in &warnings {
        match warning.severity() {
            WarningSeverity::Loud => warn!(%warning),
            WarningSeverity::Note => info!(%warning),
        }
    }

    let stats = ReconcileStats {
        observations: raw_values.len(),
        entities_merged,
        entities_emitted: records.len(),
        entities_with_idc: entities.iter().filter(|e| e.has_idc()).count(),
        entities_slotted: entities.iter().filter(|e| e.region_slot.is_some()).count(),
        field_conflicts,
        loud_warnings: warnings
            .iter()
            .filter(|w| w.severity() == WarningSeverity::Loud)
            .count(),
    };
    info!(
        entities = stats.entities_emitted,
        with_idc = stats.entities_with_idc,
        conflicts = stats.field_conflicts,
        "reconciliation complete"
    );

    ReconcileOutcome {
        records,
        entities,
        warnings,
        stats,
    }
}
