//! Source reconciliation engine for the country reference table.
//!
//! Unifies country entities referenced under different spellings across
//! independently-maintained sources, resolves field-level conflicts by
//! authority precedence, and disambiguates entities that share one
//! international dialing code.

pub mod filter;
pub mod merger;
pub mod normalizer;
pub mod pipeline;
pub mod precedence;
pub mod resolver;
pub mod slots;
pub mod table;

pub use filter::filter_missing_idc;
pub use merger::{EntityShell, merge};
pub use normalizer::NameNormalizer;
pub use pipeline::{ReconcileOptions, ReconcileOutcome, ReconcileStats, reconcile};
pub use precedence::precedence;
pub use resolver::{resolve, resolve_all};
pub use slots::assign_region_slots;
pub use table::build_table;
