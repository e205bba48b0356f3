use rand::Rng;
use sqlx::{PgExecutor, PgPool};

use crate::{
    app::{errors::DefaultApiError, models::api_error::ApiError},
    auth::jwt::models::claims::Claims,
    users,
};

use super::{
    dtos::create_quote_dto::CreateQuoteDto,
    errors::QuotesApiError,
    models::{quote::Quote, quote_info::QuoteInfo},
    DEFAULT_QUOTES,
};

async fn insert_quote<'e>(quote: &Quote, executor: impl PgExecutor<'e>) -> Result<(), sqlx::Error> {
    sqlx::query(
        "
        INSERT INTO quotes (id, content, author, category, created_at)
        VALUES ($1, $2, $3, $4, $5)
        ",
    )
    .bind(&quote.id)
    .bind(&quote.content)
    .bind(&quote.author)
    .bind(quote.category.value())
    .bind(quote.created_at)
    .execute(executor)
    .await
    .map(|_| ())
}

pub async fn create_quote(dto: &CreateQuoteDto, pool: &PgPool) -> Result<Quote, ApiError> {
    let quote = Quote::new(&dto.content, &dto.author, dto.category);

    match insert_quote(&quote, pool).await {
        Ok(_) => {
            tracing::info!(quote_id = %quote.id, author = %quote.author, "created quote");
            Ok(quote)
        }
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

/// Seeds the built-in quotes when the table is empty. Returns how many were inserted.
pub async fn create_default_quotes_if_empty_as_admin(pool: &PgPool) -> Result<usize, ApiError> {
    let sqlx_result = sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM quotes)")
        .fetch_one(pool)
        .await;

    match sqlx_result {
        Ok(true) => return Ok(0),
        Ok(false) => {}
        Err(e) => {
            tracing::error!(%e);
            return Err(DefaultApiError::InternalServerError.value());
        }
    }

    let Ok(mut tx) = pool.begin().await
    else {
        return Err(DefaultApiError::InternalServerError.value());
    };

    for (content, author, category) in DEFAULT_QUOTES {
        let quote = Quote::new(content, author, category);

        if let Err(e) = insert_quote(&quote, &mut *tx).await {
            tracing::error!(%e);
            return Err(DefaultApiError::InternalServerError.value());
        }
    }

    if let Err(e) = tx.commit().await {
        tracing::error!(%e);
        return Err(DefaultApiError::InternalServerError.value());
    }

    Ok(DEFAULT_QUOTES.len())
}

pub async fn get_random_quote(pool: &PgPool) -> Result<Quote, ApiError> {
    let count = match sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM quotes")
        .fetch_one(pool)
        .await
    {
        Ok(count) => count,
        Err(e) => {
            tracing::error!(%e);
            return Err(DefaultApiError::InternalServerError.value());
        }
    };

    if count == 0 {
        return Err(QuotesApiError::QuoteNotFound.value());
    }

    let offset = rand::thread_rng().gen_range(0..count);

    let sqlx_result = sqlx::query_as::<_, Quote>(
        "
        SELECT * FROM quotes
        ORDER BY created_at ASC, id ASC
        OFFSET $1 LIMIT 1
        ",
    )
    .bind(offset)
    .fetch_optional(pool)
    .await;

    match sqlx_result {
        Ok(quote) => match quote {
            Some(quote) => Ok(quote),
            // A quote was removed after counting.
            None => Err(QuotesApiError::QuoteNotFound.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn get_quote_for_user(claims: &Claims, pool: &PgPool) -> Result<QuoteInfo, ApiError> {
    match users::service::get_user_quote(claims, pool).await? {
        Some(quote) => Ok(QuoteInfo::from(quote)),
        None => get_random_quote(pool).await.map(QuoteInfo::from),
    }
}
