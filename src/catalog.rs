//! Network catalog passthrough
//!
//! Every call re-queries the provider. Nothing is cached or reshaped.

use axum::body::Bytes;
use axum::http::StatusCode;
use thiserror::Error;
use tracing::{error, warn};

use crate::provider::{ProviderClient, ProviderError};

/// Fallback when a failed catalog response carries no `error`
pub const CATALOG_FALLBACK_MESSAGE: &str = "Failed to fetch networks";

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Upstream answered with a non-2xx status
    #[error("Provider rejected catalog request ({status}): {message}")]
    Transport { status: StatusCode, message: String },

    #[error("Unexpected provider failure: {0}")]
    Unexpected(#[from] ProviderError),
}

pub struct CatalogService;

impl CatalogService {
    /// Fetch the network catalog. The body is returned byte for byte, so
    /// the provider's key order survives.
    pub async fn fetch_networks(provider: &ProviderClient) -> Result<Bytes, CatalogError> {
        let response = provider
            .fetch_networks()
            .await
            .inspect_err(|e| error!("Error fetching networks: {e}"))?;

        if !response.is_success() {
            let message = response.error_message(CATALOG_FALLBACK_MESSAGE);
            warn!(status = %response.status, %message, "provider rejected catalog request");
            return Err(CatalogError::Transport {
                status: response.status,
                message,
            });
        }

        // Must be JSON even though it is passed through untouched
        response
            .json()
            .inspect_err(|e| error!("Network catalog is not JSON: {e}"))?;

        Ok(response.body)
    }
}
