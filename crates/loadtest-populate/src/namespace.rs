//! Database/collection pair identifying the insert target.

use crate::error::LoadError;
use std::fmt;
use std::str::FromStr;

/// Target of every insert: `database.collection`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    pub database: String,
    pub collection: String,
}

impl Namespace {
    pub fn new(database: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            collection: collection.into(),
        }
    }
}

impl FromStr for Namespace {
    type Err = LoadError;

    /// Parse `database.collection`. Exactly one `.` separating two non-empty parts.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        match parts.as_slice() {
            [database, collection] if !database.is_empty() && !collection.is_empty() => {
                Ok(Self::new(*database, *collection))
            }
            _ => Err(LoadError::Config(format!(
                "Invalid namespace '{s}': expected <database>.<collection>, e.g. myDatabase.myCollection"
            ))),
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.database, self.collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_namespace() {
        let ns: Namespace = "sample_mflix.movies".parse().unwrap();
        assert_eq!(ns.database, "sample_mflix");
        assert_eq!(ns.collection, "movies");
        assert_eq!(ns.to_string(), "sample_mflix.movies");
    }

    #[test]
    fn test_reject_malformed_namespace() {
        for bad in ["movies", "a.b.c", ".movies", "sample_mflix.", "", "."] {
            let result = bad.parse::<Namespace>();
            assert!(
                matches!(result, Err(LoadError::Config(_))),
                "'{bad}' should be rejected"
            );
        }
    }
}
