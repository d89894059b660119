//! Error types for domain operations

use thiserror::Error;

/// Errors that can occur in domain operations
#[derive(Debug, Error)]
pub enum DomainError {
    /// A field value failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// An id collided with one already registered in its scope
    #[error("Duplicate {entity} id: {id}")]
    DuplicateId {
        /// Kind of entity whose id collided ("employee" or "project")
        entity: &'static str,
        /// The colliding id
        id: u32,
    },

    /// A project status outside the fixed enumeration
    #[error("Invalid project status: {0:?}")]
    InvalidStatus(String),

    /// Employee lookup failed where existence was required
    #[error("Employee not found: id {id}")]
    EmployeeNotFound {
        /// The id that was searched for
        id: u32,
    },

    /// Department lookup failed where existence was required
    #[error("Department not found: {name:?}")]
    DepartmentNotFound {
        /// The name that was searched for
        name: String,
    },

    /// Project lookup failed where existence was required
    #[error("Project not found: id {id}")]
    ProjectNotFound {
        /// The id that was searched for
        id: u32,
    },

    /// File read or write failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DomainError {
    /// Build a validation error from anything displayable
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
