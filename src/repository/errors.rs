use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    #[error("Backend request failed: {0}")]
    Request(String),

    #[error("Backend rejected the call: {0}")]
    Rejected(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[cfg(feature = "server")]
impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            RepositoryError::Connection(err.to_string())
        } else if err.is_decode() {
            RepositoryError::Deserialization(err.to_string())
        } else if let Some(status) = err.status() {
            if status == reqwest::StatusCode::NOT_FOUND {
                RepositoryError::NotFound
            } else {
                RepositoryError::Request(format!("status {status}"))
            }
        } else {
            RepositoryError::Request(err.to_string())
        }
    }
}
