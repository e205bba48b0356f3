use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum StatisticsApiError {
    FailedToRetrieveStatistics,
}

impl StatisticsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::FailedToRetrieveStatistics => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to retrieve statistics.".to_string(),
            },
        }
    }
}
