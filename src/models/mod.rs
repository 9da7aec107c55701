//! Data model and DTOs for the employee service API
//!
//! The `Employee` record travels unchanged through the store, the cache and
//! the HTTP layer; the response types cover the operational endpoints.

pub mod employee;
pub mod responses;

// Re-export commonly used types
pub use employee::Employee;
pub use responses::{ErrorResponse, HealthResponse, StatsResponse};
