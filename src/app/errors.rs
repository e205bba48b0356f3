use axum::http::StatusCode;

use super::models::api_error::ApiError;

#[derive(Debug)]
pub enum DefaultApiError {
    InternalServerError,
    PermissionDenied,
    NotFound,
    TooManyRequests,
}

impl DefaultApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::InternalServerError => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "An internal server error occurred.".to_string(),
            },
            Self::PermissionDenied => ApiError {
                code: StatusCode::FORBIDDEN,
                message: "Permission denied.".to_string(),
            },
            Self::NotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "Not found.".to_string(),
            },
            Self::TooManyRequests => ApiError {
                code: StatusCode::TOO_MANY_REQUESTS,
                message: "Too many requests.".to_string(),
            },
        }
    }
}
