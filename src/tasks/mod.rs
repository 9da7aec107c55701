//! Background and Startup Tasks Module
//!
//! # Tasks
//! - Seeder: inserts the sample employees once, before serving traffic
//! - TTL Cleanup: removes expired cache entries at configured intervals

mod cleanup;
mod seed;

pub use cleanup::spawn_cleanup_task;
pub use seed::{seed_employees, SEED_EMPLOYEE_NAMES};
