//! Upstream airtime provider client
//!
//! The catalog and the purchase endpoint share one address and differ only by
//! method. Every request carries the `api-key` / `secret-key` headers.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder};
use std::time::Duration;
use tracing::{debug, info};

use super::error::ProviderError;
use super::types::{ProviderResponse, UpstreamPurchase};
use crate::config::ProviderConfig;

pub struct ProviderClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    secret_key: String,
}

impl ProviderClient {
    /// Build the process-wide client. No retry, no timeout unless configured.
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(ProviderError::ClientBuild)?;

        info!(
            base_url = %config.base_url,
            timeout_secs = ?config.timeout_secs,
            "Provider client initialized"
        );

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            secret_key: config.secret_key.clone(),
        })
    }

    pub fn has_credentials(&self) -> bool {
        !self.api_key.is_empty() && !self.secret_key.is_empty()
    }

    fn request(&self, method: Method) -> RequestBuilder {
        self.client
            .request(method, &self.base_url)
            .header(CONTENT_TYPE, "application/json")
            .header("api-key", &self.api_key)
            .header("secret-key", &self.secret_key)
    }

    /// GET the network catalog
    pub async fn fetch_networks(&self) -> Result<ProviderResponse, ProviderError> {
        let response = self.request(Method::GET).send().await?;
        Self::read(response).await
    }

    /// POST a purchase
    pub async fn purchase(&self, body: &UpstreamPurchase) -> Result<ProviderResponse, ProviderError> {
        let response = self.request(Method::POST).json(body).send().await?;
        Self::read(response).await
    }

    async fn read(response: reqwest::Response) -> Result<ProviderResponse, ProviderError> {
        let status = response.status();
        let body = response.bytes().await?;
        debug!(status = %status, bytes = body.len(), "provider response received");
        Ok(ProviderResponse { status, body })
    }
}
