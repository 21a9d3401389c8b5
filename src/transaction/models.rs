use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::provider::AirtimeHistory;

/// Durable copy of one completed purchase, keyed by the provider's transaction id
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct TransactionRecord {
    pub transaction_id: String,
    pub email: String,
    pub activity: String,
    pub status: String,
    pub recipient: String,
    pub amount: Decimal,
    pub amount_used: Decimal,
    pub initial_balance: Decimal,
    pub final_balance: Decimal,
    pub method: String,
}

impl From<AirtimeHistory> for TransactionRecord {
    fn from(history: AirtimeHistory) -> Self {
        Self {
            transaction_id: history.transaction_id,
            email: history.email,
            activity: history.activity,
            status: history.status,
            recipient: history.recipient,
            amount: history.amount,
            amount_used: history.amount_used,
            initial_balance: history.initial_balance,
            final_balance: history.final_balance,
            method: history.method,
        }
    }
}

/// A record as read back from the store
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct StoredTransaction {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub record: TransactionRecord,
    pub created_at: DateTime<Utc>,
}
