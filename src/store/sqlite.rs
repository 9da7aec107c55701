//! SQLite employee store.
//!
//! Backs [`EmployeeRepository`] with a single `employees` table accessed
//! through `tokio-rusqlite`.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use super::{EmployeeRepository, Result, StoreError};
use crate::models::Employee;

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS employees (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
);
"#;

const INSERT_EMPLOYEE: &str = "INSERT INTO employees (name) VALUES (?1)";

const UPSERT_EMPLOYEE: &str = "INSERT INTO employees (id, name) VALUES (?1, ?2) \
     ON CONFLICT(id) DO UPDATE SET name = excluded.name";

const SELECT_EMPLOYEE_BY_ID: &str = "SELECT id, name FROM employees WHERE id = ?1";

const SELECT_ALL_EMPLOYEES: &str = "SELECT id, name FROM employees ORDER BY id";

const DELETE_EMPLOYEE: &str = "DELETE FROM employees WHERE id = ?1";

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

fn query_failed(e: tokio_rusqlite::Error) -> StoreError {
    StoreError::QueryFailed(e.to_string())
}

fn row_to_employee(row: &rusqlite::Row<'_>) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: Some(row.get(0)?),
        name: row.get(1)?,
    })
}

/// SQLite-backed store.
pub struct SqliteEmployeeRepository {
    conn: Connection,
}

impl SqliteEmployeeRepository {
    /// Opens (or creates) a database file and ensures the schema exists.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Opens a private in-memory database. Data is lost on drop.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(CREATE_TABLE).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(query_failed)
    }
}

#[async_trait]
impl EmployeeRepository for SqliteEmployeeRepository {
    async fn save(&self, employee: Employee) -> Result<Employee> {
        let Employee { id, name } = employee;

        self.conn
            .call(move |conn| {
                let id = match id {
                    Some(id) => {
                        conn.execute(UPSERT_EMPLOYEE, rusqlite::params![id, name])
                            .map_err(wrap_err)?;
                        id
                    }
                    None => {
                        conn.execute(INSERT_EMPLOYEE, rusqlite::params![name])
                            .map_err(wrap_err)?;
                        conn.last_insert_rowid()
                    }
                };
                Ok(Employee { id: Some(id), name })
            })
            .await
            .map_err(query_failed)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(SELECT_EMPLOYEE_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([id], row_to_employee) {
                    Ok(employee) => Ok(Some(employee)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(query_failed)
    }

    async fn find_all(&self) -> Result<Vec<Employee>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(SELECT_ALL_EMPLOYEES).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_employee).map_err(wrap_err)?;

                let mut employees = Vec::new();
                for row_result in rows {
                    employees.push(row_result.map_err(wrap_err)?);
                }
                Ok(employees)
            })
            .await
            .map_err(query_failed)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        self.conn
            .call(move |conn| {
                conn.execute(DELETE_EMPLOYEE, [id]).map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(query_failed)
    }
}
