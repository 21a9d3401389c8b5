use std::sync::Arc;

use crate::provider::ProviderClient;
use crate::transaction::TransactionStore;

/// Gateway application state (shared, read-only)
#[derive(Clone)]
pub struct AppState {
    /// Provider client with the fixed credentials
    pub provider: Arc<ProviderClient>,
    /// Transaction record store
    pub store: Arc<dyn TransactionStore>,
}

impl AppState {
    pub fn new(provider: Arc<ProviderClient>, store: Arc<dyn TransactionStore>) -> Self {
        Self { provider, store }
    }
}
