use thiserror::Error;

/// Failures talking to the upstream provider that carry no usable HTTP status.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse provider response: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Malformed provider payload: {0}")]
    MalformedPayload(String),
}
