use crate::model::ValidationError;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// An I/O error occurred while creating a directory or removing a store file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The SQLite engine reported a failure (open, schema, read, or write).
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// The platform does not provide a data directory.
    #[error("could not determine the platform data directory")]
    NoDataDir,

    /// A record value was NaN or infinite. SQLite would store it as NULL.
    #[error("{field} must be a finite number")]
    NonFinite {
        /// Display label of the offending field.
        field: &'static str,
    },

    /// A model name was rejected before any store was opened.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Rejects the first non-finite value, naming its field.
pub(super) fn check_finite(labels: &[&'static str], values: &[f64]) -> Result<(), StorageError> {
    match labels.iter().zip(values).find(|(_, value)| !value.is_finite()) {
        Some((&field, _)) => Err(StorageError::NonFinite { field }),
        None => Ok(()),
    }
}
