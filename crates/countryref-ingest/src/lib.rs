//! Source adapters for the country reference table builder.
//!
//! Each adapter parses one already-fetched snapshot file into the common
//! raw observation shape the engine consumes. Network fetching, caching,
//! and retries are deliberately not here: adapters work on materialized
//! files only.

pub mod dialing;
pub mod discovery;
pub mod snapshot;
pub mod un;
pub mod wikipedia;
pub mod worldatlas;

pub use dialing::{DialingNumbers, parse_dialing};
pub use discovery::{SnapshotSet, discover_snapshots, snapshot_file_name};
pub use snapshot::{Snapshot, SnapshotRow, read_snapshot};
pub use un::read_un_snapshot;
pub use wikipedia::read_wikipedia_snapshot;
pub use worldatlas::read_worldatlas_snapshot;
