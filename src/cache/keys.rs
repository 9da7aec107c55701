//! Cache keys and cached values for the employees region.

use std::fmt;

use crate::models::Employee;

/// Key of an entry in the employees cache region.
///
/// Per-employee entries are keyed by id. The full listing lives under a
/// single fixed key that does not depend on any id, so the two never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Id(i64),
    All,
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheKey::Id(id) => write!(f, "id:{}", id),
            CacheKey::All => write!(f, "all"),
        }
    }
}

/// Value held by the employees cache region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CachedValue {
    /// A single employee, stored under [`CacheKey::Id`]
    One(Employee),
    /// The full listing, stored under [`CacheKey::All`]
    Many(Vec<Employee>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_display() {
        assert_eq!(CacheKey::Id(7).to_string(), "id:7");
        assert_eq!(CacheKey::All.to_string(), "all");
    }

    #[test]
    fn test_id_and_aggregate_keys_differ() {
        assert_ne!(CacheKey::Id(0), CacheKey::All);
        assert_eq!(CacheKey::Id(3), CacheKey::Id(3));
    }
}
