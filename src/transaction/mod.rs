//! Completed-purchase records
//!
//! PostgreSQL-based storage for transaction records.

pub mod error;
pub mod models;
pub mod repository;

pub use error::StoreError;
pub use models::{StoredTransaction, TransactionRecord};
pub use repository::{PgTransactionStore, TransactionStore};
