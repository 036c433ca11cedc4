use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application error, serialized on the wire as `{"error": "<message>"}`.
///
/// Upstream faults are deliberately generic: whatever went wrong upstream is
/// logged server-side and replaced by the endpoint's fixed message, so callers
/// never see upstream status codes or raw error text.
#[derive(Debug)]
pub enum AppError {
    Validation { message: String },
    Upstream { message: &'static str },
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn upstream(message: &'static str) -> Self {
        Self::Upstream { message }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// User-facing message, independent of transport.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message } => message,
            Self::Upstream { message } => message,
            Self::Internal { message } => message,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Upstream { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = json!({ "error": self.message() });

        (status, Json(body)).into_response()
    }
}
