//! Error handling utilities for repositories

use conserve_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError, keeping the driver error as its source
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(Box::new(e))
}

/// Check for a foreign key violation and return the appropriate error or fallback.
///
/// `on_violation` receives the name of the violated constraint when the driver reports one.
pub fn map_foreign_key_violation<F>(e: SqlxError, on_violation: F) -> DomainError
where
    F: FnOnce(Option<&str>) -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return on_violation(db_err.constraint());
        }
    }
    map_db_error(e)
}

/// Create a "connection not found" error
pub fn connection_not_found(id: i32) -> DomainError {
    DomainError::ConnectionNotFound(id)
}

/// Create a "report not found" error
pub fn report_not_found(id: i32) -> DomainError {
    DomainError::ReportNotFound(id)
}
