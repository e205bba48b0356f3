use axum::{
    extract::State,
    headers::{authorization::Bearer, Authorization},
    http::StatusCode,
    Json, TypedHeader,
};
use serde_json::{json, Value};
use validator::Validate;

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    AppState,
};

use super::{
    dtos::{login_dto::LoginDto, register_dto::RegisterDto},
    jwt::models::claims::Claims,
    models::access_info::AccessInfo,
    service,
};

pub async fn register(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<RegisterDto>,
) -> Result<(StatusCode, Json<AccessInfo>), ApiError> {
    match dto.validate() {
        Ok(_) => match service::register(&dto, &state).await {
            Ok(access_info) => Ok((StatusCode::CREATED, Json(access_info))),
            Err(e) => Err(e),
        },
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}

pub async fn login(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<LoginDto>,
) -> Result<Json<AccessInfo>, ApiError> {
    match dto.validate() {
        Ok(_) => match service::login(&dto, &state).await {
            Ok(access_info) => Ok(Json(access_info)),
            Err(e) => Err(e),
        },
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}

// Tokens are stateless; the client discards its copy.
pub async fn logout() -> Json<Value> {
    tracing::info!("logged out");

    Json(json!({ "message": "Logged out." }))
}

pub async fn get_me(
    State(state): State<AppState>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<Value>, ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;

    match service::get_user_from_claims(&claims, &state.pool).await {
        Ok(user) => Ok(Json(json!({
            "id": user.id,
            "username": user.username,
            "role": user.role,
        }))),
        Err(e) => Err(e),
    }
}
