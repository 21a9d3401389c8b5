use axum::body::Bytes;
use tracing::{debug, error, info, warn};

use super::error::PurchaseError;
use super::validation::{PurchaseRequest, validate_purchase};
use crate::provider::{AirtimeHistory, ProviderClient, UpstreamPurchase, embedded_error};
use crate::transaction::{TransactionRecord, TransactionStore};

/// Fallback when a failed upstream response carries no `error`
pub const PURCHASE_FALLBACK_MESSAGE: &str = "Failed to purchase airtime";

pub struct PurchaseService;

impl PurchaseService {
    /// Validate, buy upstream, record the transaction.
    ///
    /// Returns the provider's success body untouched. No retries: a repeated
    /// submission is a second real purchase.
    pub async fn execute(
        provider: &ProviderClient,
        store: &dyn TransactionStore,
        req: PurchaseRequest,
    ) -> Result<Bytes, PurchaseError> {
        // 1. Validation
        let purchase = validate_purchase(req).inspect_err(|e| {
            debug!(reason = %e, "purchase request rejected");
        })?;

        // 2. Upstream dispatch
        info!(
            network = %purchase.network,
            amount = %purchase.amount,
            "dispatching airtime purchase"
        );
        let response = provider
            .purchase(&UpstreamPurchase::from(&purchase))
            .await
            .inspect_err(|e| error!("Provider purchase call failed: {e}"))?;

        // 3. Transport failure
        if !response.is_success() {
            let message = response.error_message(PURCHASE_FALLBACK_MESSAGE);
            warn!(status = %response.status, %message, "provider rejected purchase");
            return Err(PurchaseError::Transport {
                status: response.status,
                message,
            });
        }

        // 4. Logical failure
        let body = response
            .json()
            .inspect_err(|e| error!("Provider purchase response is not JSON: {e}"))?;
        if let Some(message) = embedded_error(&body) {
            warn!(%message, "provider reported purchase failure");
            return Err(PurchaseError::Logical(message));
        }

        // 5. Persistence
        let history = AirtimeHistory::from_success_body(&body)
            .inspect_err(|e| error!("Provider purchase response unusable: {e}"))?;
        let record = TransactionRecord::from(history);
        store.create(&record).await.map_err(|source| {
            // Upstream already charged; only the local record is missing
            error!(
                transaction_id = %record.transaction_id,
                "Failed to record completed purchase: {source}"
            );
            PurchaseError::Persistence {
                transaction_id: record.transaction_id.clone(),
                source,
            }
        })?;

        info!(transaction_id = %record.transaction_id, "airtime purchase recorded");
        Ok(response.body)
    }
}
