use alphago_core::domain::common::entities::app_errors::CoreError;
use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts, Query, Request,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("{0}")]
    BadGateway(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub code: String,
    pub status: u16,
    pub message: String,
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "E_BAD_REQUEST"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "E_NOT_FOUND"),
            ApiError::PayloadTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, "E_PAYLOAD_TOO_LARGE"),
            ApiError::BadGateway(_) => (StatusCode::BAD_GATEWAY, "E_UPSTREAM"),
            ApiError::ServiceUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "E_SERVICE_UNAVAILABLE")
            }
            ApiError::InternalServerError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "E_INTERNAL_SERVER_ERROR")
            }
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::NotFound("Resource not found".to_string()),
            CoreError::Invalid => ApiError::BadRequest("Invalid request".to_string()),
            CoreError::InvalidInput(message) => ApiError::BadRequest(message),
            CoreError::ExternalServiceError(message) | CoreError::MalformedResponse(message) => {
                ApiError::BadGateway(message)
            }
            CoreError::ServiceUnavailable(message) => ApiError::ServiceUnavailable(message),
            CoreError::InternalServerError => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.parts();
        if status.is_server_error() {
            tracing::error!(%status, "{}", self);
        }

        let body = ApiErrorResponse {
            code: code.to_string(),
            status: status.as_u16(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON body extractor that runs `validator` rules before the handler sees the payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        Ok(ValidateJson(value))
    }
}

/// Query string extractor with the same error body and validation as [`ValidateJson`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidateQuery<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: QueryRejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        Ok(ValidateQuery(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_statuses() {
        let cases = [
            (CoreError::NotFound, StatusCode::NOT_FOUND),
            (
                CoreError::InvalidInput("empty".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                CoreError::MalformedResponse("bad json".to_string()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                CoreError::ServiceUnavailable("offline".to_string()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                CoreError::InternalServerError,
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(ApiError::from(error).into_response().status(), status);
        }
    }

    #[test]
    fn test_message_is_kept() {
        let error = ApiError::from(CoreError::InvalidInput("label text is empty".to_string()));
        assert_eq!(error, ApiError::BadRequest("label text is empty".to_string()));
    }

    #[derive(Debug, Deserialize, Validate)]
    struct Page {
        #[validate(range(min = 1, max = 10))]
        size: usize,
    }

    async fn extract(uri: &str) -> Result<ValidateQuery<Page>, ApiError> {
        let request = axum::http::Request::builder().uri(uri).body(()).unwrap();
        let (mut parts, _) = request.into_parts();
        ValidateQuery::<Page>::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_validate_query_accepts_valid_params() {
        let ValidateQuery(page) = extract("/items?size=5").await.unwrap();
        assert_eq!(page.size, 5);
    }

    #[tokio::test]
    async fn test_validate_query_rejections_are_bad_requests() {
        for uri in ["/items", "/items?size=abc", "/items?size=50"] {
            let error = extract(uri).await.unwrap_err();
            assert!(matches!(error, ApiError::BadRequest(_)), "{uri}");
            assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }
}
