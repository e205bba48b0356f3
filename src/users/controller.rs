use axum::{
    extract::State,
    headers::{authorization::Bearer, Authorization},
    Json, TypedHeader,
};
use validator::Validate;

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    auth::jwt::models::claims::Claims,
    AppState,
};

use super::{dtos::edit_user_quote_dto::EditUserQuoteDto, models::user_quote::UserQuote, service};

pub async fn get_user_quote(
    State(state): State<AppState>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<Option<UserQuote>>, ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;

    match service::get_user_quote(&claims, &state.pool).await {
        Ok(quote) => Ok(Json(quote)),
        Err(e) => Err(e),
    }
}

pub async fn edit_user_quote(
    State(state): State<AppState>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
    JsonFromRequest(dto): JsonFromRequest<EditUserQuoteDto>,
) -> Result<Json<UserQuote>, ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;
    dto.validate()?;

    match service::edit_user_quote(&dto, &claims, &state.pool).await {
        Ok(quote) => {
            tracing::info!(user_id = %claims.id, "edited user quote");
            Ok(Json(quote))
        }
        Err(e) => Err(e),
    }
}

pub async fn delete_user_quote(
    State(state): State<AppState>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
) -> Result<(), ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;

    service::delete_user_quote(&claims, &state.pool).await
}
