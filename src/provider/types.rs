//! Provider wire types.
//!
//! Field names follow the provider's camelCase JSON.

use axum::body::Bytes;
use axum::http::StatusCode;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use super::error::ProviderError;

/// Purchase body sent upstream: `{ phone, firstLevel, amount }`
#[derive(Debug, Clone, Serialize)]
pub struct UpstreamPurchase {
    pub phone: String,
    #[serde(rename = "firstLevel")]
    pub first_level: String,
    #[serde(serialize_with = "serialize_amount")]
    pub amount: Decimal,
}

/// Amounts go upstream as JSON numbers; whole values without a fraction.
fn serialize_amount<S>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    use serde::ser::Error;

    let normalized = amount.normalize();
    if normalized.scale() == 0 {
        if let Some(whole) = normalized.to_i64() {
            return serializer.serialize_i64(whole);
        }
    }
    match normalized.to_f64() {
        Some(value) => serializer.serialize_f64(value),
        None => Err(S::Error::custom("amount out of range")),
    }
}

/// Transaction details embedded in a successful purchase response
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirtimeHistory {
    pub transaction_id: String,
    pub email: String,
    pub activity: String,
    pub status: String,
    pub recipient: String,
    pub amount: Decimal,
    pub amount_used: Decimal,
    pub initial_balance: Decimal,
    pub final_balance: Decimal,
    /// The provider capitalises this one
    #[serde(alias = "Method")]
    pub method: String,
}

impl AirtimeHistory {
    /// Extract `airtimeHistory` from a successful purchase body
    pub fn from_success_body(body: &Value) -> Result<Self, ProviderError> {
        let history = body
            .get("airtimeHistory")
            .ok_or_else(|| ProviderError::MalformedPayload("missing airtimeHistory".to_string()))?;
        Ok(AirtimeHistory::deserialize(history)?)
    }
}

/// Raw upstream response: status plus untouched body bytes
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl ProviderResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn json(&self) -> Result<Value, ProviderError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Upstream `error` message of a failed response, or `fallback`
    pub fn error_message(&self, fallback: &str) -> String {
        self.json()
            .ok()
            .and_then(|body| embedded_error(&body))
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// A truthy `error` field in a provider body.
///
/// `null`, `false`, `0` and `""` do not count as an error.
pub fn embedded_error(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(message) if message.is_empty() => None,
        Value::String(message) => Some(message.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
