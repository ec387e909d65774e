use crate::validation::{NormalizeError, SchemaError};

/// Failure reported by a storage collaborator
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RepositoryError {
    pub message: String,
}

impl RepositoryError {
    pub fn new(msg: &str) -> Self {
        RepositoryError { message: msg.to_string() }
    }
}

/// Failure reported by a delivery collaborator
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct DeliveryError {
    pub message: String,
}

impl DeliveryError {
    pub fn new(msg: &str) -> Self {
        DeliveryError { message: msg.to_string() }
    }
}

/// Hard failures of an interaction. Invalid user input is not one of these;
/// it comes back as `Outcome::Invalid`.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
    #[error("delivery failed: {0}")]
    Delivery(#[from] DeliveryError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("validation wiring is broken: {0}")]
    Wiring(#[from] NormalizeError),
}
