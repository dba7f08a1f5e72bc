//! Snapshot discovery: locate the per-source files in a data directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, warn};

use countryref_model::{RawFieldValue, SourceId};

use crate::un::read_un_snapshot;
use crate::wikipedia::read_wikipedia_snapshot;
use crate::worldatlas::read_worldatlas_snapshot;

/// Expected snapshot file name for one source.
pub fn snapshot_file_name(source: SourceId) -> &'static str {
    match source {
        SourceId::Un => "un.csv",
        SourceId::WorldAtlas => "worldatlas.csv",
        SourceId::Wikipedia => "wikipedia.csv",
    }
}

/// The snapshot files found (or not) in one data directory.
#[derive(Debug, Clone)]
pub struct SnapshotSet {
    pub root: PathBuf,
    pub un: Option<PathBuf>,
    pub worldatlas: Option<PathBuf>,
    pub wikipedia: Option<PathBuf>,
}

impl SnapshotSet {
    /// Sources with no snapshot present, in adapter order.
    pub fn missing(&self) -> Vec<SourceId> {
        SourceId::ALL
            .into_iter()
            .filter(|source| self.path_for(*source).is_none())
            .collect()
    }

    fn path_for(&self, source: SourceId) -> Option<&Path> {
        match source {
            SourceId::Un => self.un.as_deref(),
            SourceId::WorldAtlas => self.worldatlas.as_deref(),
            SourceId::Wikipedia => self.wikipedia.as_deref(),
        }
    }

    /// Read every present snapshot and concatenate the observation
    /// sequences in adapter order (UN, WorldAtlas, Wikipedia). Order
    /// within each source is preserved, so the engine input is
    /// order-stable across runs.
    pub fn read_all(&self) -> Result<Vec<RawFieldValue>> {
        let mut raw_values = Vec::new();
        for source in SourceId::ALL {
            let Some(path) = self.path_for(source) else {
                warn!(source = %source, "snapshot missing, source skipped");
                continue;
            };
            let values = match source {
                SourceId::Un => read_un_snapshot(path),
                SourceId::WorldAtlas => read_worldatlas_snapshot(path),
                SourceId::Wikipedia => read_wikipedia_snapshot(path),
            }
            .with_context(|| format!("load {source} snapshot"))?;
            debug!(source = %source, observations = values.len(), "snapshot loaded");
            raw_values.extend(values);
        }
        Ok(raw_values)
    }
}

/// Locate snapshot files in `root`. Fails only when the directory itself
/// is unusable or no snapshot at all is present; individual missing
/// sources are reported through [`SnapshotSet::missing`].
pub fn discover_snapshots(root: &Path) -> Result<SnapshotSet> {
    if !root.is_dir() {
        bail!("data directory not found: {}", root.display());
    }
    let locate = |source| {
        let path = root.join(snapshot_file_name(source));
        path.is_file().then_some(path)
    };
    let set = SnapshotSet {
        root: root.to_path_buf(),
        un: locate(SourceId::Un),
        worldatlas: locate(SourceId::WorldAtlas),
        wikipedia: locate(SourceId::Wikipedia),
    };
    if set.missing().len() == SourceId::ALL.len() {
        bail!("no source snapshots found in {}", root.display());
    }
    Ok(set)
}
