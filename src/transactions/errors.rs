use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum TransactionsApiError {
    TransactionNotFound,
    InvalidOccurredAt,
}

impl TransactionsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::TransactionNotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "Transaction not found.".to_string(),
            },
            Self::InvalidOccurredAt => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "occurredAt must be a date, a local date-time or an RFC 3339 timestamp."
                    .to_string(),
            },
        }
    }
}
