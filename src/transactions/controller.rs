use axum::{
    extract::{Path, Query, State},
    headers::{authorization::Bearer, Authorization},
    http::StatusCode,
    Json, TypedHeader,
};
use validator::Validate;

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    auth::jwt::models::claims::Claims,
    AppState,
};

use super::{
    dtos::{
        create_transaction_dto::CreateTransactionDto, edit_transaction_dto::EditTransactionDto,
        get_transactions_filter_dto::GetTransactionsFilterDto,
    },
    models::transaction::Transaction,
    service,
};

pub async fn create_transaction(
    State(state): State<AppState>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
    JsonFromRequest(dto): JsonFromRequest<CreateTransactionDto>,
) -> Result<(StatusCode, Json<Transaction>), ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;
    dto.validate()?;

    match service::create_transaction(&dto, &claims, &state.pool, &state.utc_offset).await {
        Ok(transaction) => Ok((StatusCode::CREATED, Json(transaction))),
        Err(e) => Err(e),
    }
}

pub async fn get_transactions(
    State(state): State<AppState>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
    Query(dto): Query<GetTransactionsFilterDto>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;
    dto.validate()?;

    match service::get_transactions(&dto, &claims, &state.pool, &state.utc_offset).await {
        Ok(transactions) => Ok(Json(transactions)),
        Err(e) => Err(e),
    }
}

pub async fn get_transaction_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<Transaction>, ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;

    match service::get_transaction_by_id(&id, &claims, &state.pool).await {
        Ok(transaction) => Ok(Json(transaction)),
        Err(e) => Err(e),
    }
}

pub async fn edit_transaction_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
    JsonFromRequest(dto): JsonFromRequest<EditTransactionDto>,
) -> Result<Json<Transaction>, ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;
    dto.validate()?;

    match service::edit_transaction_by_id(&id, &dto, &claims, &state.pool, &state.utc_offset)
        .await
    {
        Ok(transaction) => Ok(Json(transaction)),
        Err(e) => Err(e),
    }
}

pub async fn delete_transaction_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
) -> Result<(), ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;

    service::delete_transaction_by_id(&id, &claims, &state.pool).await
}
