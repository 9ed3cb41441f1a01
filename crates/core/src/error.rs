/// Domain-level failures surfaced to the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Failures reported by a repository implementation.
///
/// The storage crate classifies driver errors into these two buckets so the
/// domain and HTTP layers never see driver types.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A key or constraint was violated (duplicate id, dangling reference).
    #[error("Constraint violated in {operation}: {message}")]
    Conflict {
        operation: &'static str,
        message: String,
    },

    /// Any other storage failure (connectivity, malformed row, ...).
    #[error("Storage error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },
}

impl StorageError {
    pub fn conflict(operation: &'static str, message: impl ToString) -> Self {
        Self::Conflict {
            operation,
            message: message.to_string(),
        }
    }

    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }
}
