//! Transaction record storage
//!
//! Records are insert-only. Uniqueness of `transaction_id` is enforced by the
//! store itself, never by a read-before-write.

use async_trait::async_trait;
use sqlx::PgPool;

use super::error::StoreError;
use super::models::{StoredTransaction, TransactionRecord};

#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Persist one record. A second record with the same transaction id must
    /// fail with [`StoreError::Duplicate`].
    async fn create(&self, record: &TransactionRecord) -> Result<(), StoreError>;

    /// Connectivity check
    async fn health_check(&self) -> Result<(), StoreError>;
}

/// PostgreSQL-backed store (`airtime_transactions_tb`)
pub struct PgTransactionStore {
    pool: PgPool,
}

impl PgTransactionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a record by provider transaction id
    pub async fn get(&self, transaction_id: &str) -> Result<Option<StoredTransaction>, StoreError> {
        let row = sqlx::query_as::<_, StoredTransaction>(
            r#"
            SELECT transaction_id, email, activity, status, recipient,
                   amount, amount_used, initial_balance, final_balance, method,
                   created_at
            FROM airtime_transactions_tb
            WHERE transaction_id = $1
            "#,
        )
        .bind(transaction_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}

#[async_trait]
impl TransactionStore for PgTransactionStore {
    async fn create(&self, record: &TransactionRecord) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO airtime_transactions_tb
                (transaction_id, email, activity, status, recipient,
                 amount, amount_used, initial_balance, final_balance, method)
            VALUES
                ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(&record.transaction_id)
        .bind(&record.email)
        .bind(&record.activity)
        .bind(&record.status)
        .bind(&record.recipient)
        .bind(record.amount)
        .bind(record.amount_used)
        .bind(record.initial_balance)
        .bind(record.final_balance)
        .bind(&record.method)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::from_insert(e, &record.transaction_id))?;

        Ok(())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
