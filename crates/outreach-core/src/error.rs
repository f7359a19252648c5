//! Store error types.

use thiserror::Error;

use crate::models::CampaignStatus;
use crate::validation::ValidationError;

/// Errors that can occur when reading or writing records.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Record not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Record already exists
    #[error("{entity} already exists: {id}")]
    AlreadyExists { entity: &'static str, id: String },

    /// Campaign status transition not allowed from the current status
    #[error("invalid campaign transition: {from} -> {to}")]
    InvalidTransition {
        from: CampaignStatus,
        to: CampaignStatus,
    },

    /// Input rejected before reaching the backend
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Backend failure (connection, query, corrupt row, ...)
    #[error("backend error: {0}")]
    Backend(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
