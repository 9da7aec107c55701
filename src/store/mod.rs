//! Employee Store Module
//!
//! The persistence seam. The service only sees [`EmployeeRepository`]; the
//! concrete backend is picked at startup.
//!
//! # Backends
//! - [`InMemoryEmployeeRepository`] - default, ordered map with an id sequence
//! - `SqliteEmployeeRepository` - `sqlite` feature, used when `SQLITE_PATH` is set

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Employee;

mod memory;
#[cfg(feature = "sqlite")]
mod sqlite;

pub use memory::InMemoryEmployeeRepository;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteEmployeeRepository;

// == Store Error ==
/// Failures raised by a store backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

// == Repository Trait ==
/// CRUD access to employee records. The store is the source of truth.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Inserts or replaces a record.
    ///
    /// A record without an id gets a fresh one; a record with an id replaces
    /// (or creates) the row under that id. Returns the stored record.
    async fn save(&self, employee: Employee) -> Result<Employee>;

    /// Gets a record by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>>;

    /// Gets every record, ordered by id.
    async fn find_all(&self) -> Result<Vec<Employee>>;

    /// Deletes a record by id. Deleting a missing id is not an error.
    async fn delete_by_id(&self, id: i64) -> Result<()>;
}
