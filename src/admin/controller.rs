use axum::{
    extract::{Path, Query, State},
    headers::{authorization::Bearer, Authorization},
    Json, TypedHeader,
};
use validator::Validate;

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    auth::{self, jwt::models::claims::Claims},
    users::{
        dtos::{edit_user_role_dto::EditUserRoleDto, get_users_filter_dto::GetUsersFilterDto},
        enums::user_role::UserRole,
        models::user::User,
    },
    AppState,
};

use super::{
    models::{system_statistics::SystemStatistics, users_page::UsersPage},
    service,
};

pub async fn get_users(
    State(state): State<AppState>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
    Query(dto): Query<GetUsersFilterDto>,
) -> Result<Json<UsersPage>, ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;
    auth::service::get_user_with_role(&claims, &UserRole::ADMINS, &state.pool).await?;
    dto.validate()?;

    match service::get_users(&dto, &state.pool).await {
        Ok(page) => Ok(Json(page)),
        Err(e) => Err(e),
    }
}

pub async fn edit_user_role_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
    JsonFromRequest(dto): JsonFromRequest<EditUserRoleDto>,
) -> Result<Json<User>, ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;
    let admin =
        auth::service::get_user_with_role(&claims, &[UserRole::SuperAdmin], &state.pool).await?;

    match service::edit_user_role_by_id(&id, &dto.role, &admin, &state.pool).await {
        Ok(user) => Ok(Json(user)),
        Err(e) => Err(e),
    }
}

pub async fn delete_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
) -> Result<(), ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;
    let admin =
        auth::service::get_user_with_role(&claims, &[UserRole::SuperAdmin], &state.pool).await?;

    service::delete_user_by_id(&id, &admin, &state.pool).await
}

pub async fn get_system_statistics(
    State(state): State<AppState>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<SystemStatistics>, ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;
    auth::service::get_user_with_role(&claims, &UserRole::ADMINS, &state.pool).await?;

    match service::get_system_statistics(&state.pool).await {
        Ok(statistics) => Ok(Json(statistics)),
        Err(e) => Err(e),
    }
}
