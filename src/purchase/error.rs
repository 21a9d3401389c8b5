use axum::http::StatusCode;
use thiserror::Error;

use super::validation::ValidationError;
use crate::provider::ProviderError;
use crate::transaction::StoreError;

/// Message returned for every failure whose cause stays internal
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Why a purchase failed. Each variant has its own origin and HTTP status.
#[derive(Debug, Error)]
pub enum PurchaseError {
    /// Request rejected before any upstream call
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Upstream answered with a non-2xx status
    #[error("Provider rejected purchase ({status}): {message}")]
    Transport { status: StatusCode, message: String },

    /// Upstream answered 2xx but reported an `error`
    #[error("Provider reported failure: {0}")]
    Logical(String),

    /// Upstream purchase succeeded but the record could not be written
    #[error("Failed to record transaction {transaction_id}: {source}")]
    Persistence {
        transaction_id: String,
        #[source]
        source: StoreError,
    },

    /// Network failure, unparseable or malformed provider response
    #[error("Unexpected provider failure: {0}")]
    Unexpected(#[from] ProviderError),
}

impl PurchaseError {
    pub fn status(&self) -> StatusCode {
        match self {
            PurchaseError::Validation(_) | PurchaseError::Logical(_) => StatusCode::BAD_REQUEST,
            PurchaseError::Transport { status, .. } => *status,
            PurchaseError::Persistence { .. } | PurchaseError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to show the caller
    pub fn public_message(&self) -> String {
        match self {
            PurchaseError::Validation(e) => e.to_string(),
            PurchaseError::Transport { message, .. } => message.clone(),
            PurchaseError::Logical(message) => message.clone(),
            PurchaseError::Persistence { .. } | PurchaseError::Unexpected(_) => {
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        }
    }
}
