//! Purchase request validation
//!
//! Checks run in a fixed order and stop at the first failure:
//! presence, amount, phone length. Fields arrive as raw JSON values so a
//! wrong-typed field is a validation failure, not an unreadable body.

use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::provider::UpstreamPurchase;

/// Phone numbers are exactly this many characters
pub const PHONE_LENGTH: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Amount must be a positive number")]
    NonPositiveAmount,

    #[error("Phone number must be 11 digits")]
    InvalidPhoneLength,
}

/// Inbound purchase body: `{ phone, firstLevel, amount }`
///
/// `amount` may be a JSON number or a numeric string.
#[derive(Debug, Clone, Default, PartialEq, ToSchema)]
pub struct PurchaseRequest {
    #[schema(value_type = Option<String>, example = "08031234567")]
    pub phone: Option<Value>,
    /// Provider network identifier
    #[schema(rename = "firstLevel", value_type = Option<String>, example = "mtn")]
    pub network: Option<Value>,
    #[schema(value_type = Option<String>, example = "100")]
    pub amount: Option<Value>,
}

impl PurchaseRequest {
    /// Pick the purchase fields out of a parsed body.
    ///
    /// `network` is accepted in place of `firstLevel`. Non-object bodies
    /// yield an empty request.
    pub fn from_json(body: &Value) -> Self {
        let field = |name: &str| body.get(name).filter(|v| !v.is_null()).cloned();
        PurchaseRequest {
            phone: field("phone"),
            network: field("firstLevel").or_else(|| field("network")),
            amount: field("amount"),
        }
    }
}

/// A request that passed every check; the only thing sent upstream
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedPurchase {
    pub phone: String,
    pub network: String,
    pub amount: Decimal,
}

impl From<&ValidatedPurchase> for UpstreamPurchase {
    fn from(purchase: &ValidatedPurchase) -> Self {
        UpstreamPurchase {
            phone: purchase.phone.clone(),
            first_level: purchase.network.clone(),
            amount: purchase.amount,
        }
    }
}

/// `null`, `false`, `0` and `""` count as absent
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64() != Some(0.0),
        _ => true,
    }
}

/// Networks are strings; numeric ids are stringified
fn network_name(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if is_present(value) => Some(n.to_string()),
        _ => None,
    }
}

/// `None` for anything that is not a finite decimal
fn parse_amount(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s.trim()),
        _ => None,
    }
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

/// Validate a purchase request.
///
/// Only `amount > 0` is enforced here; the form's minimum of 50 is a UI rule.
pub fn validate_purchase(req: PurchaseRequest) -> Result<ValidatedPurchase, ValidationError> {
    let phone = req.phone.filter(is_present);
    let network = req.network.as_ref().and_then(network_name);
    let amount = req
        .amount
        .filter(|a| !matches!(a, Value::String(s) if s.trim().is_empty()));

    let (Some(phone), Some(network), Some(amount)) = (phone, network, amount) else {
        return Err(ValidationError::MissingFields);
    };

    let amount = parse_amount(&amount)
        .filter(|a| *a > Decimal::ZERO)
        .ok_or(ValidationError::NonPositiveAmount)?;

    // Only a string has a length to check
    let phone = match phone {
        Value::String(s) if s.chars().count() == PHONE_LENGTH => s,
        _ => return Err(ValidationError::InvalidPhoneLength),
    };

    Ok(ValidatedPurchase {
        phone,
        network,
        amount,
    })
}
