use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid request")]
    Invalid,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    /// Upstream failures worth another attempt against the model.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            CoreError::ExternalServiceError(_)
                | CoreError::MalformedResponse(_)
                | CoreError::ServiceUnavailable(_)
        )
    }
}
