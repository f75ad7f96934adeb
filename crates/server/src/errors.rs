use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// JSON error body: `{"error": <message>, "detail": <optional diagnostic>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: String,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: impl Into<String>, detail: Option<String>) -> Self {
        Self { status, error: error.into(), detail }
    }

    /// Translate a service failure into its HTTP status and error text.
    pub fn from_service(e: ServiceError) -> Self {
        match e {
            ServiceError::MissingFields(fields) => {
                Self::new(StatusCode::BAD_REQUEST, "All fields are required", Some(format!("missing field(s): {fields}")))
            }
            ServiceError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, "Invalid field", Some(msg)),
            ServiceError::Conflict(msg) => Self::new(StatusCode::BAD_REQUEST, msg, None),
            ServiceError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "Student not found", None),
            ServiceError::Db(msg) => {
                error!(error = %msg, "storage failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some(msg))
            }
        }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = match self.detail {
            Some(detail) => serde_json::json!({"error": self.error, "detail": detail}),
            None => serde_json::json!({"error": self.error}),
        };
        (self.status, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("runtime check failed: {0}")]
    Runtime(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
