use sqlx::PgPool;

use crate::{
    app::{
        errors::DefaultApiError,
        models::api_error::ApiError,
        util::hasher,
    },
    categories,
    users::{self, enums::user_role::UserRole, models::user::User},
    AppState,
};

use super::{
    dtos::{login_dto::LoginDto, register_dto::RegisterDto},
    errors::AuthApiError,
    jwt::{models::claims::Claims, util::sign_jwt},
    models::access_info::AccessInfo,
};

pub async fn register(dto: &RegisterDto, state: &AppState) -> Result<AccessInfo, ApiError> {
    let hash = match hasher::hash(dto.password.to_string()).await {
        Ok(hash) => hash,
        Err(e) => return Err(e.to_api_error()),
    };

    let user = User::new(&dto.username, hash, UserRole::User);
    users::service::create_user_as_admin(&user, &state.pool).await?;
    categories::service::create_default_categories_as_admin(&user.id, &state.pool).await?;

    tracing::info!(user_id = %user.id, username = %user.username, "registered user");

    let login_dto = LoginDto {
        username: dto.username.to_string(),
        password: dto.password.to_string(),
    };

    login(&login_dto, state).await
}

pub async fn login(dto: &LoginDto, state: &AppState) -> Result<AccessInfo, ApiError> {
    let Some(user) = users::service::get_user_by_username_as_admin(&dto.username, &state.pool).await?
    else {
        tracing::warn!(username = %dto.username, "login for unknown user");
        return Err(AuthApiError::BadLogin.value());
    };

    let matches = match hasher::verify(dto.password.to_string(), user.password_hash.to_string()).await
    {
        Ok(matches) => matches,
        Err(e) => return Err(e.to_api_error()),
    };

    if !matches {
        tracing::warn!(user_id = %user.id, "login with invalid password");
        return Err(AuthApiError::BadLogin.value());
    }

    categories::service::create_default_categories_if_missing_as_admin(&user.id, &state.pool)
        .await?;
    users::service::set_user_last_login_by_id_as_admin(&user.id, &state.pool).await?;

    let (access_token, claims) = sign_jwt(&user, &state.envy.jwt_secret)?;

    tracing::info!(user_id = %user.id, "logged in");

    Ok(AccessInfo {
        access_token,
        expires_at: claims.exp,
    })
}

pub async fn get_user_from_claims(claims: &Claims, pool: &PgPool) -> Result<User, ApiError> {
    users::service::get_user_by_id(&claims.id, pool).await
}

/// Loads the caller and checks their stored role, so demotions apply before the token expires.
pub async fn get_user_with_role(
    claims: &Claims,
    allowed: &[UserRole],
    pool: &PgPool,
) -> Result<User, ApiError> {
    let user = users::service::get_user_by_id(&claims.id, pool).await?;

    if !allowed.contains(&user.role) {
        tracing::warn!(user_id = %user.id, role = user.role.value(), "permission denied");
        return Err(DefaultApiError::PermissionDenied.value());
    }

    Ok(user)
}
