//! Airtime handlers (network catalog, purchase)

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use serde_json::Value;
use tracing::{Instrument, error, info_span};
use uuid::Uuid;

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult, ErrorBody, RawJson};
use crate::catalog::CatalogService;
use crate::purchase::{PurchaseRequest, PurchaseService};

/// List purchasable networks
///
/// Relays the provider's catalog unchanged.
#[utoipa::path(
    get,
    path = "/airtime",
    responses(
        (status = 200, description = "Provider network catalog, verbatim", content_type = "application/json"),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Airtime"
)]
pub async fn get_networks(State(state): State<Arc<AppState>>) -> ApiResult<RawJson> {
    let body = CatalogService::fetch_networks(&state.provider).await?;
    Ok(RawJson(body))
}

/// Purchase airtime
///
/// Only a body that is not JSON maps to the generic 500. Wrong-typed or
/// absent fields are validation failures.
#[utoipa::path(
    post,
    path = "/airtime",
    request_body = PurchaseRequest,
    responses(
        (status = 200, description = "Provider success body, verbatim", content_type = "application/json"),
        (status = 400, description = "Validation or provider business failure", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Airtime"
)]
pub async fn purchase_airtime(State(state): State<Arc<AppState>>, body: Bytes) -> ApiResult<RawJson> {
    let request_id = Uuid::new_v4();

    async move {
        let payload: Value = serde_json::from_slice(&body).map_err(|e| {
            error!("Error purchasing airtime: unreadable request body: {e}");
            ApiError::internal()
        })?;
        let req = PurchaseRequest::from_json(&payload);

        let body = PurchaseService::execute(&state.provider, state.store.as_ref(), req).await?;
        Ok::<_, ApiError>(RawJson(body))
    }
    .instrument(info_span!("purchase", %request_id))
    .await
}
