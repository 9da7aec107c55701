//! Employee Cache - Employee CRUD service with a cache-aside layer
//!
//! An in-process `employees` cache region sits in front of the employee
//! store: reads are cache-aside, writes are write-through, deletes evict.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use service::EmployeeService;
pub use tasks::{seed_employees, spawn_cleanup_task};
