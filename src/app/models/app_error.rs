use std::fmt;

use axum::http::StatusCode;

use super::api_error::ApiError;

/// Failure inside the service that never reaches the client verbatim.
#[derive(Debug)]
pub struct AppError {
    pub message: String,
}

impl AppError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn to_api_error(self) -> ApiError {
        tracing::error!(message = %self.message, "internal error");

        ApiError {
            code: StatusCode::INTERNAL_SERVER_ERROR,
            message: "An internal server error occurred.".to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
