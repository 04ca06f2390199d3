use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use crate::types::ErrorResponse;

/// Errors surfaced to HTTP clients
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request body could not be read
    #[error("{0}")]
    BadRequest(String),

    /// Generator not initialized
    #[error("{0}")]
    ServiceUnavailable(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            detail: self.to_string(),
        })
    }
}
