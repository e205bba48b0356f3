use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum QuotesApiError {
    QuoteNotFound,
}

impl QuotesApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::QuoteNotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "Quote not found.".to_string(),
            },
        }
    }
}
