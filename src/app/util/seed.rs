use sqlx::PgPool;

use crate::{
    app::{env::Envy, models::api_error::ApiError, util::hasher},
    categories, quotes,
    users::{self, enums::user_role::UserRole, models::user::User},
};

/// Creates the configured super admin unless a user with that name already exists.
pub async fn create_super_admin_if_missing(envy: &Envy, pool: &PgPool) -> Result<(), ApiError> {
    let (Some(username), Some(password)) = (&envy.super_admin_username, &envy.super_admin_password)
    else {
        tracing::debug!("no super admin configured");
        return Ok(());
    };

    if users::service::get_user_by_username_as_admin(username, pool)
        .await?
        .is_some()
    {
        return Ok(());
    }

    let hash = match hasher::hash(password.to_string()).await {
        Ok(hash) => hash,
        Err(e) => return Err(e.to_api_error()),
    };

    let user = User::new(username, hash, UserRole::SuperAdmin);
    users::service::create_user_as_admin(&user, pool).await?;
    categories::service::create_default_categories_as_admin(&user.id, pool).await?;

    tracing::info!(user_id = %user.id, %username, "created super admin");

    Ok(())
}

pub async fn seed_quotes(pool: &PgPool) -> Result<(), ApiError> {
    let count = quotes::service::create_default_quotes_if_empty_as_admin(pool).await?;

    if count > 0 {
        tracing::info!(count, "seeded quotes");
    }

    Ok(())
}
