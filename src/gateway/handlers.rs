//! HTTP handlers

pub mod airtime;
pub mod health;

pub use airtime::{get_networks, purchase_airtime};
pub use health::{HealthResponse, health_check};
