//! In-memory employee store.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{EmployeeRepository, Result, StoreError};
use crate::models::Employee;

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, Employee>,
    /// Last id handed out; ids start at 1 and are never reused
    last_id: i64,
}

/// In-memory store backend.
///
/// Rows live in a `BTreeMap` behind `Arc<RwLock<_>>`, so clones share the
/// same data and listings come back in id order. Nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmployeeRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn save(&self, employee: Employee) -> Result<Employee> {
        let mut table = self.table.write().await;

        let id = match employee.id {
            Some(id) => {
                table.last_id = table.last_id.max(id);
                id
            }
            None => {
                table.last_id = table
                    .last_id
                    .checked_add(1)
                    .ok_or_else(|| StoreError::QueryFailed("id sequence exhausted".to_string()))?;
                table.last_id
            }
        };

        let stored = Employee {
            id: Some(id),
            name: employee.name,
        };
        table.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Employee>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        let mut table = self.table.write().await;
        table.rows.remove(&id);
        Ok(())
    }
}
