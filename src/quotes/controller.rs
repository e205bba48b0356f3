use axum::{
    extract::State,
    headers::{authorization::Bearer, Authorization},
    http::StatusCode,
    Json, TypedHeader,
};
use validator::Validate;

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    auth::{self, jwt::models::claims::Claims},
    users::enums::user_role::UserRole,
    AppState,
};

use super::{
    dtos::create_quote_dto::CreateQuoteDto,
    models::{quote::Quote, quote_info::QuoteInfo},
    service,
};

pub async fn get_random_quote(State(state): State<AppState>) -> Result<Json<Quote>, ApiError> {
    match service::get_random_quote(&state.pool).await {
        Ok(quote) => Ok(Json(quote)),
        Err(e) => Err(e),
    }
}

pub async fn create_quote(
    State(state): State<AppState>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
    JsonFromRequest(dto): JsonFromRequest<CreateQuoteDto>,
) -> Result<(StatusCode, Json<Quote>), ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;
    auth::service::get_user_with_role(&claims, &UserRole::ADMINS, &state.pool).await?;
    dto.validate()?;

    match service::create_quote(&dto, &state.pool).await {
        Ok(quote) => Ok((StatusCode::CREATED, Json(quote))),
        Err(e) => Err(e),
    }
}

pub async fn get_my_quote(
    State(state): State<AppState>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<QuoteInfo>, ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;

    match service::get_quote_for_user(&claims, &state.pool).await {
        Ok(quote) => Ok(Json(quote)),
        Err(e) => Err(e),
    }
}
