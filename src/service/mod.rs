//! Service Module
//!
//! The cache-aside layer between the HTTP handlers and the store.

mod employee;


pub use employee::EmployeeService;
