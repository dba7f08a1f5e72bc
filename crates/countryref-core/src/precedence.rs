//! Declarative authority-precedence tables.
//!
//! The "who wins a disagreement" policy lives here as plain ordered lists,
//! independent of the merge mechanics, so the policy stays auditable and
//! testable on its own. Earlier in a list wins.

use countryref_model::{FieldFamily, SourceId};

/// UN is authoritative for names, formal names, and ISO numeric codes.
const DESCRIPTIVE: &[SourceId] = &[SourceId::Un, SourceId::WorldAtlas, SourceId::Wikipedia];

/// UN is authoritative for ISO alpha codes; WorldAtlas has known defects
/// here (Romania, Timor-Leste) and is fallback only.
const ISO_CODE: &[SourceId] = &[SourceId::Un, SourceId::WorldAtlas, SourceId::Wikipedia];

/// The dialing-code source is authoritative for IDC and area-code data.
const DIALING: &[SourceId] = &[SourceId::Wikipedia, SourceId::WorldAtlas, SourceId::Un];

/// Precedence order for one field family.
pub fn precedence(family: FieldFamily) -> &'static [SourceId] {
    match family {
        FieldFamily::Descriptive => DESCRIPTIVE,
        FieldFamily::IsoCode => ISO_CODE,
        FieldFamily::Dialing => DIALING,
    }
}

/// Rank of a source within a family's precedence list (lower wins).
/// Sources missing from the list rank below every listed source.
pub fn rank(family: FieldFamily, source: SourceId) -> usize {
    let order = precedence(family);
    order
        .iter()
        .position(|candidate| *candidate == source)
        .unwrap_or(order.len())
}
