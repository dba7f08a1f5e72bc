use thiserror::Error;

/// Errors from parsing model identifiers out of their stable string forms.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown source id: {0}")]
    UnknownSource(String),
}
