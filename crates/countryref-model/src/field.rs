//! Field names, field families, and raw per-source observations.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::source::SourceId;

/// A field of the canonical country record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldName {
    Name,
    FormalName,
    Iso2,
    Iso3,
    IsoNumeric,
    Idc,
    AreaCodes,
}

impl FieldName {
    /// All fields, in canonical record order.
    pub const ALL: [FieldName; 7] = [
        FieldName::Name,
        FieldName::FormalName,
        FieldName::Iso2,
        FieldName::Iso3,
        FieldName::IsoNumeric,
        FieldName::Idc,
        FieldName::AreaCodes,
    ];

    /// Stable name used in provenance maps and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::FormalName => "formal_name",
            FieldName::Iso2 => "iso2",
            FieldName::Iso3 => "iso3",
            FieldName::IsoNumeric => "iso_numeric",
            FieldName::Idc => "idc",
            FieldName::AreaCodes => "area_codes",
        }
    }

    /// The precedence family this field belongs to.
    pub fn family(&self) -> FieldFamily {
        match self {
            FieldName::Name | FieldName::FormalName | FieldName::IsoNumeric => {
                FieldFamily::Descriptive
            }
            FieldName::Iso2 | FieldName::Iso3 => FieldFamily::IsoCode,
            FieldName::Idc | FieldName::AreaCodes => FieldFamily::Dialing,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field families share one authority-precedence list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldFamily {
    /// Names and the ISO numeric code: the UN list is authoritative.
    Descriptive,
    /// ISO 3166-1 alpha codes: the UN list is authoritative.
    IsoCode,
    /// Dialing data: the dialing-code source is authoritative.
    Dialing,
}

/// An observed field value. Area-code sets are the one list-shaped field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldValue {
    Text(String),
    Codes(Vec<String>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn codes<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldValue::Codes(values.into_iter().map(Into::into).collect())
    }

    /// Text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value),
            FieldValue::Codes(_) => None,
        }
    }

    /// Code list content, if this is a code-set value.
    pub fn as_codes(&self) -> Option<&[String]> {
        match self {
            FieldValue::Text(_) => None,
            FieldValue::Codes(codes) => Some(codes),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(value) => f.write_str(value),
            FieldValue::Codes(codes) => f.write_str(&codes.join(" ")),
        }
    }
}

/// One observation of one field from one source.
///
/// Produced by adapters, consumed once by the entity merger. The
/// `reported_name` is the name exactly as the source spells it; the
/// normalizer maps it to a canonical entity key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFieldValue {
    pub source: SourceId,
    pub reported_name: String,
    pub field: FieldName,
    pub value: FieldValue,
}

impl RawFieldValue {
    pub fn new(
        source: SourceId,
        reported_name: impl Into<String>,
        field: FieldName,
        value: FieldValue,
    ) -> Self {
        Self {
            source,
            reported_name: reported_name.into(),
            field,
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_partition_the_fields() {
        assert_eq!(FieldName::Name.family(), FieldFamily::Descriptive);
        assert_eq!(FieldName::IsoNumeric.family(), FieldFamily::Descriptive);
        assert_eq!(FieldName::Iso2.family(), FieldFamily::IsoCode);
        assert_eq!(FieldName::Iso3.family(), FieldFamily::IsoCode);
        assert_eq!(FieldName::Idc.family(), FieldFamily::Dialing);
        assert_eq!(FieldName::AreaCodes.family(), FieldFamily::Dialing);
    }

    #[test]
    fn code_sets_display_space_separated() {
        let value = FieldValue::codes(["809", "829"]);
        assert_eq!(value.to_string(), "809 829");
    }
}
