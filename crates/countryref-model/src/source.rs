//! Source dataset identifiers.
//!
//! Every raw observation carries the identity of the upstream dataset that
//! produced it. The conflict resolver never compares sources by anything
//! other than these identifiers, so adding a source means extending this
//! enum and the precedence tables that reference it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Identity of an upstream source dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SourceId {
    /// United Nations statistics division country list.
    Un,
    /// WorldAtlas country-code table.
    WorldAtlas,
    /// Wikipedia international dialing code table.
    Wikipedia,
}

impl SourceId {
    /// All known sources, in the order adapters are normally run.
    pub const ALL: [SourceId; 3] = [SourceId::Un, SourceId::WorldAtlas, SourceId::Wikipedia];

    /// Stable identifier used in logs and provenance output.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceId::Un => "un",
            SourceId::WorldAtlas => "worldatlas",
            SourceId::Wikipedia => "wikipedia",
        }
    }

    /// Human-readable source name for summaries.
    pub fn display_name(&self) -> &'static str {
        match self {
            SourceId::Un => "United Nations statistics",
            SourceId::WorldAtlas => "WorldAtlas country codes",
            SourceId::Wikipedia => "Wikipedia dialing codes",
        }
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "un" => Ok(SourceId::Un),
            "worldatlas" => Ok(SourceId::WorldAtlas),
            "wikipedia" => Ok(SourceId::Wikipedia),
            other => Err(ModelError::UnknownSource(other.to_string())),
        }
    }
}
