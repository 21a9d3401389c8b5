//! Airtime Gateway
//!
//! Buys mobile airtime through a third-party provider and keeps a local
//! record of every completed purchase.
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────┐    ┌──────────┐
//! │  Client  │───▶│ Purchase │───▶│ Provider │    │  Store   │
//! │  (HTTP)  │    │ (Valid.) │    │  (API)   │───▶│ (PG, 1x) │
//! └──────────┘    └──────────┘    └──────────┘    └──────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - YAML configuration + credential overrides
//! - [`logging`] - tracing subscriber setup
//! - [`db`] - PostgreSQL pool and schema
//! - [`provider`] - Upstream airtime provider client
//! - [`catalog`] - Network catalog passthrough
//! - [`purchase`] - Validation and purchase orchestration
//! - [`transaction`] - Transaction records and their store
//! - [`gateway`] - HTTP router and handlers

pub mod config;
pub mod db;
pub mod logging;

pub mod catalog;
pub mod gateway;
pub mod provider;
pub mod purchase;
pub mod transaction;

// Convenient re-exports at crate root
pub use catalog::{CatalogError, CatalogService};
pub use provider::{ProviderClient, ProviderError};
pub use purchase::{PurchaseError, PurchaseRequest, PurchaseService, ValidationError};
pub use transaction::{PgTransactionStore, StoreError, TransactionRecord, TransactionStore};
