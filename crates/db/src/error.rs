use sakila_core::error::StorageError;

/// PostgreSQL `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";
/// PostgreSQL `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Classify a sqlx error for the domain layer.
///
/// Key and reference violations become [`StorageError::Conflict`];
/// everything else is [`StorageError::Database`].
pub(crate) fn storage_error(operation: &'static str, err: sqlx::Error) -> StorageError {
    if let sqlx::Error::Database(db_err) = &err {
        let code = db_err.code();
        if matches!(code.as_deref(), Some(UNIQUE_VIOLATION | FOREIGN_KEY_VIOLATION)) {
            let constraint = db_err.constraint().unwrap_or("unknown");
            tracing::debug!(operation, constraint, "Constraint violation");
            return StorageError::conflict(
                operation,
                format!("violates constraint {constraint}"),
            );
        }
    }
    StorageError::database(operation, err)
}
