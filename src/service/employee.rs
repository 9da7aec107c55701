//! Cache-aside employee service.
//!
//! Each method wraps one store call with its own cache policy on the
//! `employees` region:
//!
//! | Operation   | Cache policy                                        |
//! |-------------|-----------------------------------------------------|
//! | `save`      | write through, then put under the returned id       |
//! | `get_by_id` | read `Id(id)`, on miss load and put (hits only)     |
//! | `get_all`   | read `All`, on miss load and put the whole list     |
//! | `update`    | store read-modify-write, then put under `Id(id)`    |
//! | `delete`    | store delete, then evict `Id(id)`                   |
//!
//! The `All` entry is never invalidated by writes. A listing cached before a
//! save, update or delete keeps being served until it expires or is evicted.

use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::cache::{CacheKey, CacheRegion, CachedValue};
use crate::error::{Result, ServiceError};
use crate::models::Employee;
use crate::store::EmployeeRepository;

/// Employee operations with the cache region in front of the store.
#[derive(Clone)]
pub struct EmployeeService {
    repository: Arc<dyn EmployeeRepository>,
    cache: CacheRegion,
}

impl EmployeeService {
    pub fn new(repository: Arc<dyn EmployeeRepository>, cache: CacheRegion) -> Self {
        Self { repository, cache }
    }

    /// The cache region this service populates.
    pub fn cache(&self) -> &CacheRegion {
        &self.cache
    }

    // == Save ==
    /// Writes the employee to the store and caches the stored record under
    /// its id, replacing any cached copy.
    pub async fn save(&self, employee: Employee) -> Result<Employee> {
        let saved = self.repository.save(employee).await?;

        match saved.id {
            Some(id) => {
                self.cache
                    .put(CacheKey::Id(id), CachedValue::One(saved.clone()))
                    .await;
                debug!(employee_id = id, "Employee saved");
            }
            None => warn!("Store returned an employee without id, not caching"),
        }

        Ok(saved)
    }

    // == Get By Id ==
    /// Returns the employee from cache, falling back to the store.
    ///
    /// Only found records are cached: asking again for a missing id always
    /// goes to the store.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Employee>> {
        let key = CacheKey::Id(id);

        match self.cache.get(&key).await {
            Some(CachedValue::One(employee)) => {
                trace!(employee_id = id, "Cache hit for employee");
                return Ok(Some(employee));
            }
            Some(CachedValue::Many(_)) => {
                warn!(employee_id = id, "Unexpected listing under employee key");
            }
            None => trace!(employee_id = id, "Cache miss for employee"),
        }

        let employee = self.repository.find_by_id(id).await?;

        if let Some(ref found) = employee {
            self.cache.put(key, CachedValue::One(found.clone())).await;
        }

        Ok(employee)
    }

    // == Get All ==
    /// Returns every employee, served from the aggregate entry when cached.
    pub async fn get_all(&self) -> Result<Vec<Employee>> {
        match self.cache.get(&CacheKey::All).await {
            Some(CachedValue::Many(employees)) => {
                trace!(count = employees.len(), "Cache hit for employee listing");
                return Ok(employees);
            }
            Some(CachedValue::One(_)) => warn!("Unexpected single employee under listing key"),
            None => trace!("Cache miss for employee listing"),
        }

        let employees = self.repository.find_all().await?;
        self.cache
            .put(CacheKey::All, CachedValue::Many(employees.clone()))
            .await;

        Ok(employees)
    }

    // == Update ==
    /// Renames an existing employee.
    ///
    /// Reads the current record from the store (never from cache), copies
    /// only `name` from `new_data`, saves, and caches the result under `id`.
    /// A missing id is a [`ServiceError::Runtime`].
    pub async fn update(&self, id: i64, new_data: Employee) -> Result<Employee> {
        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::Runtime(format!("Employee not found with id {}", id)))?;

        let updated = self
            .repository
            .save(Employee {
                name: new_data.name,
                ..current
            })
            .await?;

        self.cache
            .put(CacheKey::Id(id), CachedValue::One(updated.clone()))
            .await;
        debug!(employee_id = id, "Employee updated");

        Ok(updated)
    }

    // == Delete ==
    /// Deletes from the store, then evicts the cached copy for `id`.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.repository.delete_by_id(id).await?;
        let evicted = self.cache.evict(&CacheKey::Id(id)).await;
        debug!(employee_id = id, evicted, "Employee deleted");
        Ok(())
    }
}
