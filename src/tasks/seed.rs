//! Startup Seeder
//!
//! Inserts the fixed sample employees through the service, which also warms
//! their per-id cache entries (the listing entry stays cold).

use tracing::info;

use crate::error::Result;
use crate::models::Employee;
use crate::service::EmployeeService;

/// Names inserted at startup, in insertion order.
pub const SEED_EMPLOYEE_NAMES: [&str; 4] = ["John Doe", "Jane Smith", "Alice Johnson", "Bob Brown"];

/// Saves the sample employees, letting the store assign ids.
///
/// Stops at the first failure.
pub async fn seed_employees(service: &EmployeeService) -> Result<Vec<Employee>> {
    let mut seeded = Vec::with_capacity(SEED_EMPLOYEE_NAMES.len());

    for name in SEED_EMPLOYEE_NAMES {
        seeded.push(service.save(Employee::new(name)).await?);
    }

    info!(count = seeded.len(), "Seeded sample employees");
    Ok(seeded)
}
