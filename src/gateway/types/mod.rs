//! Gateway types module
//!
//! - [`response`]: error body, `ApiError` and raw JSON passthrough

pub mod response;

pub use response::{ApiError, ApiResult, ErrorBody, RawJson};
