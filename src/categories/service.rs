use sqlx::{PgExecutor, PgPool};

use crate::{
    app::{errors::DefaultApiError, models::api_error::ApiError, util::time},
    auth::jwt::models::claims::Claims,
    transactions::enums::transaction_kind::TransactionKind,
};

use super::{
    dtos::{
        create_category_dto::CreateCategoryDto, edit_category_dto::EditCategoryDto,
        get_categories_filter_dto::GetCategoriesFilterDto,
    },
    errors::CategoriesApiError,
    models::category::Category,
    DEFAULT_CATEGORY_NAMES,
};

async fn insert_category<'e>(
    category: &Category,
    executor: impl PgExecutor<'e>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "
        INSERT INTO categories (
            id, user_id, name, kind, icon, updated_at, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        ",
    )
    .bind(&category.id)
    .bind(&category.user_id)
    .bind(&category.name)
    .bind(category.kind.value())
    .bind(&category.icon)
    .bind(category.updated_at)
    .bind(category.created_at)
    .execute(executor)
    .await
    .map(|_| ())
}

pub async fn create_category(
    dto: &CreateCategoryDto,
    claims: &Claims,
    pool: &PgPool,
) -> Result<Category, ApiError> {
    let category = Category::new(&claims.id, dto);

    match insert_category(&category, pool).await {
        Ok(_) => {
            tracing::info!(user_id = %claims.id, category_id = %category.id, "created category");
            Ok(category)
        }
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn create_default_categories_as_admin(
    user_id: &str,
    pool: &PgPool,
) -> Result<Vec<Category>, ApiError> {
    let mut categories = Vec::new();

    for kind in [TransactionKind::Expense, TransactionKind::Income] {
        for name in DEFAULT_CATEGORY_NAMES {
            let dto = CreateCategoryDto {
                name: name.to_string(),
                kind,
                icon: None,
            };
            categories.push(Category::new(user_id, &dto));
        }
    }

    let Ok(mut tx) = pool.begin().await
    else {
        return Err(DefaultApiError::InternalServerError.value());
    };

    for category in &categories {
        if let Err(e) = insert_category(category, &mut *tx).await {
            tracing::error!(%e);
            return Err(DefaultApiError::InternalServerError.value());
        }
    }

    if let Err(e) = tx.commit().await {
        tracing::error!(%e);
        return Err(DefaultApiError::InternalServerError.value());
    }

    tracing::info!(%user_id, count = categories.len(), "created default categories");

    Ok(categories)
}

pub async fn create_default_categories_if_missing_as_admin(
    user_id: &str,
    pool: &PgPool,
) -> Result<(), ApiError> {
    let sqlx_result =
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM categories WHERE user_id = $1)")
            .bind(user_id)
            .fetch_one(pool)
            .await;

    match sqlx_result {
        Ok(true) => Ok(()),
        Ok(false) => create_default_categories_as_admin(user_id, pool)
            .await
            .map(|_| ()),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn get_categories(
    dto: &GetCategoriesFilterDto,
    claims: &Claims,
    pool: &PgPool,
) -> Result<Vec<Category>, ApiError> {
    let sqlx_result = sqlx::query_as::<_, Category>(
        "
        SELECT * FROM categories
        WHERE user_id = $1 AND ($2::TEXT IS NULL OR kind = $2)
        ORDER BY created_at DESC, id DESC
        ",
    )
    .bind(&claims.id)
    .bind(dto.kind.as_ref().map(|kind| kind.value()))
    .fetch_all(pool)
    .await;

    match sqlx_result {
        Ok(categories) => Ok(categories),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn get_category_by_id(
    id: &str,
    claims: &Claims,
    pool: &PgPool,
) -> Result<Category, ApiError> {
    let sqlx_result = sqlx::query_as::<_, Category>(
        "
        SELECT * FROM categories
        WHERE id = $1 AND user_id = $2
        ",
    )
    .bind(id)
    .bind(&claims.id)
    .fetch_optional(pool)
    .await;

    match sqlx_result {
        Ok(category) => match category {
            Some(category) => Ok(category),
            None => Err(CategoriesApiError::CategoryNotFound.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn edit_category_by_id(
    id: &str,
    dto: &EditCategoryDto,
    claims: &Claims,
    pool: &PgPool,
) -> Result<Category, ApiError> {
    let sql = dto.to_sql()?;

    let mut sqlx = sqlx::query_as::<_, Category>(&sql);

    if let Some(name) = &dto.name {
        sqlx = sqlx.bind(name.trim());
    }
    if let Some(kind) = &dto.kind {
        sqlx = sqlx.bind(kind.value());
    }
    if let Some(icon) = &dto.icon {
        sqlx = sqlx.bind(icon);
    }
    sqlx = sqlx.bind(time::current_time_in_secs());
    sqlx = sqlx.bind(id);
    sqlx = sqlx.bind(&claims.id);

    match sqlx.fetch_optional(pool).await {
        Ok(category) => match category {
            Some(category) => Ok(category),
            None => Err(CategoriesApiError::CategoryNotFound.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn delete_category_by_id(
    id: &str,
    claims: &Claims,
    pool: &PgPool,
) -> Result<(), ApiError> {
    let sqlx_result = sqlx::query(
        "
        DELETE FROM categories
        WHERE id = $1 AND user_id = $2
        ",
    )
    .bind(id)
    .bind(&claims.id)
    .execute(pool)
    .await;

    match sqlx_result {
        Ok(result) => match result.rows_affected() > 0 {
            true => {
                tracing::info!(user_id = %claims.id, category_id = %id, "deleted category");
                Ok(())
            }
            false => Err(CategoriesApiError::CategoryNotFound.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}
