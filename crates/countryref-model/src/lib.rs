pub mod entity;
pub mod error;
pub mod field;
pub mod source;
pub mod warning;

pub use entity::{CountryEntity, CountryRecord};
pub use error::ModelError;
pub use field::{FieldFamily, FieldName, FieldValue, RawFieldValue};
pub use source::SourceId;
pub use warning::{ReconcileWarning, WarningSeverity};
