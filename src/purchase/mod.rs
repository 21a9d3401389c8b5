//! Purchase orchestration
//!
//! - [`validation`]: request checks before anything leaves the process
//! - [`service`]: validate → provider → classify → record
//! - [`error`]: failure taxonomy and its HTTP mapping

pub mod error;
pub mod service;
pub mod validation;

pub use error::{INTERNAL_ERROR_MESSAGE, PurchaseError};
pub use service::PurchaseService;
pub use validation::{PurchaseRequest, ValidatedPurchase, ValidationError, validate_purchase};
