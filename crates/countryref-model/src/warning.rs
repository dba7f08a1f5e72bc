//! Warnings produced by the reconciliation engine.
//!
//! Nothing in the core is fatal: data gaps are plain absent values and
//! unknown names become new entities, so neither appears here. What does
//! appear is everything a rerun of the build should surface to a human:
//! field-level disagreements between sources, duplicated ISO codes, and
//! shared-IDC groups whose area-code sets fail to distinguish their members.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::field::FieldName;
use crate::source::SourceId;

/// How loudly a warning should be reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WarningSeverity {
    /// Expected cross-source noise; shown only at increased verbosity.
    Note,
    /// A genuine upstream data defect; shown by default.
    Loud,
}

/// A single non-fatal finding from the reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReconcileWarning {
    /// Two or more sources disagreed on a field; precedence picked a winner.
    FieldConflict {
        entity: String,
        field: FieldName,
        winner: SourceId,
        winning_value: String,
        losers: Vec<(SourceId, String)>,
    },
    /// Two entities resolved to the same iso2/iso3/iso_numeric value.
    /// Both are retained; dropping either would break regenerability.
    CodeCollision {
        field: FieldName,
        value: String,
        entities: Vec<String>,
    },
    /// Two entities in one shared-IDC group carry identical non-empty
    /// area-code sets, so area codes alone cannot tell them apart.
    SlotCollision {
        idc: String,
        area_codes: Vec<String>,
        entities: Vec<String>,
    },
}

impl ReconcileWarning {
    pub fn severity(&self) -> WarningSeverity {
        match self {
            ReconcileWarning::FieldConflict { .. } => WarningSeverity::Note,
            ReconcileWarning::CodeCollision { .. } | ReconcileWarning::SlotCollision { .. } => {
                WarningSeverity::Loud
            }
        }
    }
}

impl fmt::Display for ReconcileWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReconcileWarning::FieldConflict {
                entity,
                field,
                winner,
                winning_value,
                losers,
            } => {
                write!(
                    f,
                    "{entity}: {field} conflict, kept {winner}={winning_value:?}, discarded"
                )?;
                for (source, value) in losers {
                    write!(f, " {source}={value:?}")?;
                }
                Ok(())
            }
            ReconcileWarning::CodeCollision {
                field,
                value,
                entities,
            } => {
                write!(
                    f,
                    "{field} {value:?} resolved for more than one entity: {}",
                    entities.join(", ")
                )
            }
            ReconcileWarning::SlotCollision {
                idc,
                area_codes,
                entities,
            } => {
                write!(
                    f,
                    "idc {idc}: identical area codes [{}] for {}",
                    area_codes.join(" "),
                    entities.join(", ")
                )
            }
        }
    }
}
