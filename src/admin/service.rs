use sqlx::PgPool;

use crate::{
    app::{
        models::api_error::ApiError,
        util::time::{self, SECONDS_PER_DAY},
    },
    transactions,
    users::{
        self, dtos::get_users_filter_dto::GetUsersFilterDto, enums::user_role::UserRole,
        errors::UsersApiError, models::user::User,
    },
};

use super::models::{system_statistics::SystemStatistics, users_page::UsersPage};

pub async fn get_users(dto: &GetUsersFilterDto, pool: &PgPool) -> Result<UsersPage, ApiError> {
    let (users, total) = users::service::get_users_as_admin(dto, pool).await?;

    Ok(UsersPage {
        users,
        total,
        page: dto.page(),
        page_size: dto.page_size(),
    })
}

pub async fn edit_user_role_by_id(
    id: &str,
    role: &UserRole,
    admin: &User,
    pool: &PgPool,
) -> Result<User, ApiError> {
    let user = users::service::edit_user_role_by_id_as_admin(id, role, pool).await?;

    tracing::info!(
        admin_id = %admin.id,
        user_id = %user.id,
        role = role.value(),
        "edited user role"
    );

    Ok(user)
}

pub async fn delete_user_by_id(id: &str, admin: &User, pool: &PgPool) -> Result<(), ApiError> {
    if id == admin.id {
        return Err(UsersApiError::CannotDeleteSelf.value());
    }

    users::service::delete_user_by_id_as_admin(id, pool).await?;

    tracing::info!(admin_id = %admin.id, user_id = %id, "deleted user");

    Ok(())
}

pub async fn get_system_statistics(pool: &PgPool) -> Result<SystemStatistics, ApiError> {
    let since = time::current_time_in_secs() - SECONDS_PER_DAY;

    let (total_users, total_transactions, today_active_users) = futures::try_join!(
        users::service::count_users_as_admin(pool),
        transactions::service::count_transactions_as_admin(pool),
        users::service::count_users_logged_in_since_as_admin(since, pool),
    )?;

    Ok(SystemStatistics {
        total_users,
        total_transactions,
        today_active_users,
    })
}
