//! Common error types for Fyyur

use thiserror::Error;

/// Common result type for Fyyur operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error kinds surfaced by the store and the view-model layer
#[derive(Error, Debug)]
pub enum Error {
    /// Read-path database error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested venue, artist or show does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed identifier or timestamp
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A show referenced a venue or artist that does not exist
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// The store rejected a write; the transaction was rolled back
    #[error("Persistence conflict: {0}")]
    PersistenceConflict(String),
}

impl Error {
    /// Classify an sqlx failure raised while writing.
    ///
    /// Constraint violations on `shows` foreign keys become
    /// [`Error::ForeignKeyViolation`]; everything else (unique/check
    /// violations, lost connections, busy database) is a
    /// [`Error::PersistenceConflict`].
    pub fn from_write(err: sqlx::Error) -> Self {
        match err.as_database_error() {
            Some(db_err) if db_err.is_foreign_key_violation() => {
                Error::ForeignKeyViolation(db_err.message().to_string())
            }
            _ => Error::PersistenceConflict(err.to_string()),
        }
    }

    /// Whether this error should be shown to the user as a 404 page
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}
