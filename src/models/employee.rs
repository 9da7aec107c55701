//! Employee record, used both as request body and response body.

use serde::{Deserialize, Serialize};

/// An employee record.
///
/// `id` is assigned by the store when the record is first saved; create
/// requests leave it out or send `null`. A missing `name` reads as empty,
/// nothing is validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
}

impl Employee {
    /// Creates an unsaved employee (no id yet).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Creates an employee with a known id.
    pub fn with_id(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }
}
