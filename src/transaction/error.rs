use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The transaction id is already recorded
    #[error("Transaction already recorded: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Map an insert failure, recognising unique-key violations
    pub fn from_insert(err: sqlx::Error, transaction_id: &str) -> Self {
        let duplicate = matches!(
            &err,
            sqlx::Error::Database(db_err) if db_err.is_unique_violation()
        );
        if duplicate {
            StoreError::Duplicate(transaction_id.to_string())
        } else {
            StoreError::Database(err)
        }
    }
}
