//! Initialization errors.
//!
//! Validation failures never show up here; they are surfaced only as the
//! error class on a field container.

#[derive(Debug, thiserror::Error)]
pub enum GateError {
    #[error("element not found: {0}")]
    MissingElement(String),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("no browser document available")]
    NoDocument,
}
