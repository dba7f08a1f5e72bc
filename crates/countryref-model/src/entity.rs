//! The canonical country/territory entity and its flat output shape.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::field::FieldName;
use crate::source::SourceId;

/// One reconciled country or territory.
///
/// Built fresh every run from the observed raw field values; the engine is a
/// pure function of its inputs and no entity state survives between runs.
/// `aliases` and `provenance` are internal-only and never serialized into
/// the output table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryEntity {
    /// Display/primary name (source casing preserved).
    pub canonical_name: String,
    pub formal_name: Option<String>,
    /// ISO 3166-1 alpha-2 code. Expected unique across the table when set.
    pub iso2: Option<String>,
    /// ISO 3166-1 alpha-3 code. Expected unique across the table when set.
    pub iso3: Option<String>,
    /// ISO 3166-1 numeric code as a string, leading zeros preserved.
    pub iso_numeric: Option<String>,
    /// ITU-T international dialing code; shared by every NANP member.
    pub idc: Option<String>,
    /// Area codes local to this entity within a shared-IDC numbering area.
    pub area_codes: Vec<String>,
    /// Disambiguating letter within a shared-IDC group ("A", "B", ...).
    pub region_slot: Option<String>,
    /// Alternate names observed across sources; matching only, never emitted.
    pub aliases: BTreeSet<String>,
    /// Field name -> the source whose value won conflict resolution.
    pub provenance: BTreeMap<FieldName, SourceId>,
}

impl CountryEntity {
    pub fn new(canonical_name: impl Into<String>) -> Self {
        Self {
            canonical_name: canonical_name.into(),
            ..Self::default()
        }
    }

    /// True when a dialing code was resolved for this entity.
    pub fn has_idc(&self) -> bool {
        self.idc.as_deref().is_some_and(|idc| !idc.is_empty())
    }

    /// Lowest area code by numeric value, used as a slot-assignment sort key.
    pub fn lowest_area_code(&self) -> Option<u32> {
        self.area_codes
            .iter()
            .filter_map(|code| code.parse::<u32>().ok())
            .min()
    }
}

/// The externally visible record shape emitted by the table builder.
///
/// Internal fields (`aliases`, `provenance`) are already stripped here;
/// serializers expand `area_codes` into one `region_*_code` column per
/// allotted code, up to the widest group observed in the table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub name: String,
    pub formal_name: Option<String>,
    pub iso2: Option<String>,
    pub iso3: Option<String>,
    pub iso_numeric: Option<String>,
    pub idc: Option<String>,
    pub region_slot: Option<String>,
    pub area_codes: Vec<String>,
}

impl From<&CountryEntity> for CountryRecord {
    fn from(entity: &CountryEntity) -> Self {
        Self {
            name: entity.canonical_name.clone(),
            formal_name: entity.formal_name.clone(),
            iso2: entity.iso2.clone(),
            iso3: entity.iso3.clone(),
            iso_numeric: entity.iso_numeric.clone(),
            idc: entity.idc.clone(),
            region_slot: entity.region_slot.clone(),
            area_codes: entity.area_codes.clone(),
        }
    }
}
