use axum::{BoxError, Json};
use serde_json::{json, Value};
use tower::load_shed::error::Overloaded;

use super::{errors::DefaultApiError, models::api_error::ApiError};

pub async fn get_root() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn fallback() -> ApiError {
    DefaultApiError::NotFound.value()
}

pub async fn handle_layer_error(e: BoxError) -> ApiError {
    if e.is::<Overloaded>() {
        tracing::warn!("shedding request");
        return DefaultApiError::TooManyRequests.value();
    }

    tracing::error!(%e);
    DefaultApiError::InternalServerError.value()
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[tokio::test]
    async fn test_overload_is_too_many_requests() {
        let e = handle_layer_error(Box::new(Overloaded::new())).await;
        assert_eq!(e.code, StatusCode::TOO_MANY_REQUESTS);

        let e = handle_layer_error("boom".into()).await;
        assert_eq!(e.code, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
