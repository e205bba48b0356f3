use sqlx::PgPool;

use crate::{
    app::{
        errors::DefaultApiError,
        models::api_error::ApiError,
        util::{
            sqlx::{get_code_from_err, SqlStateCodes},
            time,
        },
    },
    auth::jwt::models::claims::Claims,
};

use super::{
    dtos::{edit_user_quote_dto::EditUserQuoteDto, get_users_filter_dto::GetUsersFilterDto},
    enums::user_role::UserRole,
    errors::UsersApiError,
    models::{user::User, user_quote::UserQuote},
};

pub async fn create_user_as_admin(user: &User, pool: &PgPool) -> Result<(), ApiError> {
    let sqlx_result = sqlx::query(
        "
        INSERT INTO users (
            id, username, username_key, password_hash, role, updated_at, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        ",
    )
    .bind(&user.id)
    .bind(&user.username)
    .bind(&user.username_key)
    .bind(&user.password_hash)
    .bind(user.role.value())
    .bind(user.updated_at)
    .bind(user.created_at)
    .execute(pool)
    .await;

    match sqlx_result {
        Ok(_) => Ok(()),
        Err(e) => match get_code_from_err(&e).as_deref() {
            Some(SqlStateCodes::UNIQUE_VIOLATION) => Err(UsersApiError::UserAlreadyExists.value()),
            _ => {
                tracing::error!(%e);
                Err(DefaultApiError::InternalServerError.value())
            }
        },
    }
}

pub async fn get_user_by_id(id: &str, pool: &PgPool) -> Result<User, ApiError> {
    let sqlx_result = sqlx::query_as::<_, User>(
        "
        SELECT * FROM users WHERE id = $1
        ",
    )
    .bind(id)
    .fetch_optional(pool)
    .await;

    match sqlx_result {
        Ok(user) => match user {
            Some(user) => Ok(user),
            None => Err(UsersApiError::UserNotFound.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn get_user_by_username_as_admin(
    username: &str,
    pool: &PgPool,
) -> Result<Option<User>, ApiError> {
    let sqlx_result = sqlx::query_as::<_, User>(
        "
        SELECT * FROM users
        WHERE username_key = $1
        ",
    )
    .bind(username.to_lowercase())
    .fetch_optional(pool)
    .await;

    match sqlx_result {
        Ok(user) => Ok(user),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

/// One page of users plus the total matching the search.
pub async fn get_users_as_admin(
    dto: &GetUsersFilterDto,
    pool: &PgPool,
) -> Result<(Vec<User>, i64), ApiError> {
    let pattern = dto.search_pattern();

    let sql = dto.to_sql();
    let mut sqlx = sqlx::query_as::<_, User>(&sql);
    if let Some(pattern) = &pattern {
        sqlx = sqlx.bind(pattern);
    }

    let count_sql = dto.to_count_sql();
    let mut count_sqlx = sqlx::query_scalar::<_, i64>(&count_sql);
    if let Some(pattern) = &pattern {
        count_sqlx = count_sqlx.bind(pattern);
    }

    match futures::try_join!(sqlx.fetch_all(pool), count_sqlx.fetch_one(pool)) {
        Ok((users, total)) => Ok((users, total)),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn count_users_as_admin(pool: &PgPool) -> Result<i64, ApiError> {
    match sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
    {
        Ok(count) => Ok(count),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn count_users_logged_in_since_as_admin(
    since: i64,
    pool: &PgPool,
) -> Result<i64, ApiError> {
    match sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE last_login_at >= $1")
        .bind(since)
        .fetch_one(pool)
        .await
    {
        Ok(count) => Ok(count),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn set_user_last_login_by_id_as_admin(id: &str, pool: &PgPool) -> Result<(), ApiError> {
    let sqlx_result = sqlx::query(
        "
        UPDATE users SET last_login_at = $1
        WHERE id = $2
        ",
    )
    .bind(time::current_time_in_secs())
    .bind(id)
    .execute(pool)
    .await;

    match sqlx_result {
        Ok(_) => Ok(()),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn edit_user_role_by_id_as_admin(
    id: &str,
    role: &UserRole,
    pool: &PgPool,
) -> Result<User, ApiError> {
    let sqlx_result = sqlx::query_as::<_, User>(
        "
        UPDATE users SET role = $1, updated_at = $2
        WHERE id = $3
        RETURNING *
        ",
    )
    .bind(role.value())
    .bind(time::current_time_in_secs())
    .bind(id)
    .fetch_optional(pool)
    .await;

    match sqlx_result {
        Ok(user) => match user {
            Some(user) => Ok(user),
            None => Err(UsersApiError::UserNotFound.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn delete_user_by_id_as_admin(id: &str, pool: &PgPool) -> Result<(), ApiError> {
    let sqlx_result = sqlx::query(
        "
        DELETE FROM users
        WHERE id = $1
        ",
    )
    .bind(id)
    .execute(pool)
    .await;

    match sqlx_result {
        Ok(result) => match result.rows_affected() > 0 {
            true => Ok(()),
            false => Err(UsersApiError::UserNotFound.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn get_user_quote(claims: &Claims, pool: &PgPool) -> Result<Option<UserQuote>, ApiError> {
    let user = get_user_by_id(&claims.id, pool).await?;

    Ok(user.quote())
}

pub async fn edit_user_quote(
    dto: &EditUserQuoteDto,
    claims: &Claims,
    pool: &PgPool,
) -> Result<UserQuote, ApiError> {
    let current_time = time::current_time_in_secs();

    let sqlx_result = sqlx::query_as::<_, User>(
        "
        UPDATE users
        SET quote_content = $1, quote_author = $2, quote_updated_at = $3, updated_at = $3
        WHERE id = $4
        RETURNING *
        ",
    )
    .bind(&dto.content)
    .bind(&dto.author)
    .bind(current_time)
    .bind(&claims.id)
    .fetch_optional(pool)
    .await;

    match sqlx_result {
        Ok(Some(user)) => match user.quote() {
            Some(quote) => Ok(quote),
            None => Err(DefaultApiError::InternalServerError.value()),
        },
        Ok(None) => Err(UsersApiError::UserNotFound.value()),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn delete_user_quote(claims: &Claims, pool: &PgPool) -> Result<(), ApiError> {
    let sqlx_result = sqlx::query(
        "
        UPDATE users
        SET quote_content = NULL, quote_author = NULL, quote_updated_at = $1, updated_at = $1
        WHERE id = $2
        ",
    )
    .bind(time::current_time_in_secs())
    .bind(&claims.id)
    .execute(pool)
    .await;

    match sqlx_result {
        Ok(result) => match result.rows_affected() > 0 {
            true => Ok(()),
            false => Err(UsersApiError::UserNotFound.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}
