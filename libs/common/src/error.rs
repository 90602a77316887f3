//! Custom error types for the common library
//!
//! This module defines application-specific error types that can be used
//! throughout the application.

use sqlx::Error as SqlxError;
use thiserror::Error;

/// Custom error type for database operations
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error occurred during database connection
    #[error("Database connection error: {0}")]
    Connection(#[source] SqlxError),

    /// Error occurred during database query execution
    #[error("Database query error: {0}")]
    Query(#[source] SqlxError),

    /// A UNIQUE constraint rejected the write
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(#[source] SqlxError),

    /// A FOREIGN KEY constraint rejected the write
    #[error("Foreign key constraint violated: {0}")]
    ForeignKeyViolation(#[source] SqlxError),

    /// Error occurred during database migration
    #[error("Database migration error: {0}")]
    Migration(String),

    /// Configuration error
    #[error("Database configuration error: {0}")]
    Configuration(String),
}

impl DatabaseError {
    /// Classify an error returned by a query.
    ///
    /// Constraint violations that callers can act on get their own variant,
    /// everything else is reported as [`DatabaseError::Query`].
    pub fn from_query(error: SqlxError) -> Self {
        let (unique, foreign_key) = match error.as_database_error() {
            Some(db_error) => (
                db_error.is_unique_violation(),
                db_error.is_foreign_key_violation(),
            ),
            None => (false, false),
        };

        if unique {
            DatabaseError::UniqueViolation(error)
        } else if foreign_key {
            DatabaseError::ForeignKeyViolation(error)
        } else {
            DatabaseError::Query(error)
        }
    }
}

/// Type alias for Result with DatabaseError
pub type DatabaseResult<T> = Result<T, DatabaseError>;
