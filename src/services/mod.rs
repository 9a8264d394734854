//! Synchronous business operations called by the HTTP handlers.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod categories;
pub mod content;
pub mod email;
pub mod orders;
pub mod predefined;
pub mod products;
pub mod uploads;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures surfaced to the HTTP layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The payload failed validation.
    #[error("{0}")]
    Form(String),
    #[error("not found")]
    NotFound,
    #[error("already exists")]
    Conflict,
    /// Outgoing mail could not be delivered.
    #[error("mail delivery failed: {0}")]
    Mail(String),
    /// An upload was rejected.
    #[error("upload failed: {0}")]
    Media(String),
    /// An accepted upload could not be written to disk.
    #[error("failed to store upload: {0}")]
    Storage(String),
    #[error("internal error")]
    Internal,
}

impl From<RepositoryError> for ServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::Conflict => ServiceError::Conflict,
            other => {
                log::error!("Repository failure: {other}");
                ServiceError::Internal
            }
        }
    }
}
