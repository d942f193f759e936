use thiserror::Error;

use crate::domain::EmployeeId;

/// Fixed message surfaced to the user whenever a batch load fails.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load employees. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} value: {value:?}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Failures of the remote persons provider. Never shown to the user verbatim.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("provider answered with status {status}")]
    Status { status: u16 },
    #[error("malformed provider payload: {0}")]
    Decode(String),
    #[error("invalid provider url: {0}")]
    InvalidUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("employee {0} not found")]
    NotFound(EmployeeId),
}
