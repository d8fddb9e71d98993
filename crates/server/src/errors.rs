use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use service::errors::ServiceError;

/// JSON error envelope returned by every failing handler.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
    pub error: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>, error: Option<String>) -> Self {
        Self { status, message: message.into(), error }
    }
}

/// Single translation point for service failures. Every NotFound, whatever
/// the verb that triggered it, maps to the same structured 404 body.
impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match &e {
            ServiceError::NotFound(_) => {
                JsonApiError::new(StatusCode::NOT_FOUND, "Product not found", Some(e.to_string()))
            }
            ServiceError::Db(_) => {
                error!(err = %e, "storage failure");
                JsonApiError::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    Some(e.to_string()),
                )
            }
        }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = match self.error {
            Some(detail) => serde_json::json!({"message": self.message, "error": detail}),
            None => serde_json::json!({"message": self.message}),
        };
        (self.status, Json(body)).into_response()
    }
}
