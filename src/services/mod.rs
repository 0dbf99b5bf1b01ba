//! Request-independent application logic shared by the route handlers.

use thiserror::Error;

use crate::forms::ValidationError;
use crate::repository::errors::RepositoryError;
use crate::repository::factory::ConfigurationError;

pub mod api;
pub mod wizard;

#[derive(Debug, Error)]
/// Failures surfaced by the service layer.
pub enum ServiceError {
    /// The query string did not satisfy the declared shape. Recovered at the
    /// route boundary by rendering the error view; never silently defaulted.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The backend client could not be constructed. Fatal for the current
    /// request.
    #[error("backend configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
