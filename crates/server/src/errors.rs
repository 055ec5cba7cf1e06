use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::{ApiErrorDto, ErrorType};
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// Handler error: a [`ServiceError`] rendered as an [`ApiErrorDto`] body.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.0.error_type();
        let status = StatusCode::from_u16(kind.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!(err_type = %kind, error = %self.0, "request failed");
        } else {
            warn!(err_type = %kind, error = %self.0, "request rejected");
        }
        (status, Json(ApiErrorDto::new(kind, self.0.info()))).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        Self(e)
    }
}

/// Undecodable request bodies are reported like any other validation error.
impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        Self(ServiceError::new(ErrorType::Validation, e.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(e: PathRejection) -> Self {
        Self(ServiceError::new(ErrorType::Validation, e.body_text()))
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
}
