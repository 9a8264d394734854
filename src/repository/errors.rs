use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// Result alias used by every repository method.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Failures raised while reading or writing storefront records.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The targeted record does not exist.
    #[error("record not found")]
    NotFound,
    /// A unique constraint rejected the write.
    #[error("record already exists")]
    Conflict,
    /// A stored document column could not be decoded or encoded.
    #[error("invalid stored data: {0}")]
    InvalidData(String),
    #[error("database error: {0}")]
    Database(DieselError),
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
}

impl From<DieselError> for RepositoryError {
    fn from(value: DieselError) -> Self {
        match value {
            DieselError::NotFound => RepositoryError::NotFound,
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                RepositoryError::Conflict
            }
            other => RepositoryError::Database(other),
        }
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(value: serde_json::Error) -> Self {
        RepositoryError::InvalidData(value.to_string())
    }
}
