use thiserror::Error;
use uuid::Uuid;

use cashflow_domain::DateRangeError;

/// Unified error type for the cash flow services.
///
/// Upstream gateway failures never appear here: the engines absorb them and
/// degrade the affected source to empty (see [`crate::gateway::SourceFetch`]).
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Manual cash entry not found: {0}")]
    EntryNotFound(Uuid),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serde(String),
}

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        CoreError::Storage(err.to_string())
    }
}

impl From<DateRangeError> for CoreError {
    fn from(err: DateRangeError) -> Self {
        CoreError::InvalidInput(err.to_string())
    }
}
