//! Typed identifiers for employees and projects
//!
//! Ids are positive integers supplied by the caller, not generated. The
//! newtypes reject zero at construction and during deserialization, so an
//! invalid id can never reach stored state.

use crate::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of an employee within a company
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct EmployeeId(u32);

impl EmployeeId {
    /// Create an employee id, rejecting zero
    pub fn new(raw: u32) -> DomainResult<Self> {
        if raw == 0 {
            return Err(DomainError::validation("employee id must be positive"));
        }
        Ok(Self(raw))
    }

    /// The raw numeric value
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for EmployeeId {
    type Error = DomainError;

    fn try_from(raw: u32) -> DomainResult<Self> {
        Self::new(raw)
    }
}

impl From<EmployeeId> for u32 {
    fn from(id: EmployeeId) -> u32 {
        id.0
    }
}

impl PartialEq<u32> for EmployeeId {
    fn eq(&self, other: &u32) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier of a project within a company
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ProjectId(u32);

impl ProjectId {
    /// Create a project id, rejecting zero
    pub fn new(raw: u32) -> DomainResult<Self> {
        if raw == 0 {
            return Err(DomainError::validation("project id must be positive"));
        }
        Ok(Self(raw))
    }

    /// The raw numeric value
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for ProjectId {
    type Error = DomainError;

    fn try_from(raw: u32) -> DomainResult<Self> {
        Self::new(raw)
    }
}

impl From<ProjectId> for u32 {
    fn from(id: ProjectId) -> u32 {
        id.0
    }
}

impl PartialEq<u32> for ProjectId {
    fn eq(&self, other: &u32) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_ids_are_rejected() {
        assert!(EmployeeId::new(0).is_err());
        assert!(ProjectId::new(0).is_err());
        assert_eq!(EmployeeId::new(1).unwrap().get(), 1);
    }

    #[test]
    fn ids_deserialize_with_validation() {
        let id: EmployeeId = serde_json::from_str("7").unwrap();
        assert_eq!(id, 7);
        assert!(serde_json::from_str::<EmployeeId>("0").is_err());
        assert!(serde_json::from_str::<ProjectId>("0").is_err());
    }

    #[test]
    fn ids_serialize_as_plain_numbers() {
        let id = ProjectId::new(101).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "101");
    }
}
