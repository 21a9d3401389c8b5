//! Upstream airtime provider
//!
//! - [`client`]: HTTP client holding the fixed provider credentials
//! - [`types`]: wire types and response helpers
//! - [`error`]: transport-level failures

pub mod client;
pub mod error;
pub mod types;

pub use client::ProviderClient;
pub use error::ProviderError;
pub use types::{AirtimeHistory, ProviderResponse, UpstreamPurchase, embedded_error};
