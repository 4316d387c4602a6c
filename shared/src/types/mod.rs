//! Type definitions shared between crates

pub mod response;

pub use response::{HealthResponse, HealthStatus};
