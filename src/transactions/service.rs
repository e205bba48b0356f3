use chrono::FixedOffset;
use sqlx::PgPool;

use crate::{
    app::{
        errors::DefaultApiError,
        models::api_error::ApiError,
        util::{
            sqlx::{get_code_from_err, SqlStateCodes},
            time::{self, TimeRange},
        },
    },
    auth::jwt::models::claims::Claims,
    categories::{self, errors::CategoriesApiError},
};

use super::{
    dtos::{
        create_transaction_dto::CreateTransactionDto, edit_transaction_dto::EditTransactionDto,
        get_transactions_filter_dto::{CursorValue, GetTransactionsFilterDto},
    },
    errors::TransactionsApiError,
    models::transaction::Transaction,
};

fn parse_occurred_at(value: &str, offset: &FixedOffset) -> Result<i64, ApiError> {
    match time::parse_timestamp(value, offset) {
        Some(timestamp) => Ok(timestamp),
        None => Err(TransactionsApiError::InvalidOccurredAt.value()),
    }
}

async fn check_category_ownership(
    category_id: &str,
    claims: &Claims,
    pool: &PgPool,
) -> Result<(), ApiError> {
    if category_id.is_empty() {
        return Ok(());
    }

    categories::service::get_category_by_id(category_id, claims, pool)
        .await
        .map(|_| ())
}

fn map_write_error(e: sqlx::Error) -> ApiError {
    // The category was removed between the ownership check and the write.
    if let Some(code) = get_code_from_err(&e) {
        if code == SqlStateCodes::FOREIGN_KEY_VIOLATION {
            return CategoriesApiError::CategoryNotFound.value();
        }
    }

    tracing::error!(%e);
    DefaultApiError::InternalServerError.value()
}

pub async fn create_transaction(
    dto: &CreateTransactionDto,
    claims: &Claims,
    pool: &PgPool,
    offset: &FixedOffset,
) -> Result<Transaction, ApiError> {
    let occurred_at = match &dto.occurred_at {
        Some(value) => Some(parse_occurred_at(value, offset)?),
        None => None,
    };

    if let Some(category_id) = &dto.category_id {
        check_category_ownership(category_id, claims, pool).await?;
    }

    let transaction = Transaction::new(claims, dto, occurred_at);

    let sqlx_result = sqlx::query(
        "
        INSERT INTO transactions (
            id, user_id, category_id, title, kind, amount, occurred_at, remark,
            updated_at, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        ",
    )
    .bind(&transaction.id)
    .bind(&transaction.user_id)
    .bind(&transaction.category_id)
    .bind(&transaction.title)
    .bind(transaction.kind.value())
    .bind(transaction.amount)
    .bind(transaction.occurred_at)
    .bind(&transaction.remark)
    .bind(transaction.updated_at)
    .bind(transaction.created_at)
    .execute(pool)
    .await;

    match sqlx_result {
        Ok(_) => {
            tracing::info!(
                user_id = %claims.id,
                transaction_id = %transaction.id,
                kind = transaction.kind.value(),
                "created transaction"
            );
            Ok(transaction)
        }
        Err(e) => Err(map_write_error(e)),
    }
}

pub async fn get_transactions(
    dto: &GetTransactionsFilterDto,
    claims: &Claims,
    pool: &PgPool,
    offset: &FixedOffset,
) -> Result<Vec<Transaction>, ApiError> {
    let range = TimeRange::from_dates(dto.start_date.as_deref(), dto.end_date.as_deref(), offset);
    let query = dto.to_sql(&range)?;

    let mut sqlx = sqlx::query_as::<_, Transaction>(&query.sql);
    sqlx = sqlx.bind(&claims.id);

    if let Some(kind) = &dto.kind {
        sqlx = sqlx.bind(kind.value());
    }
    if let Some(category_id) = &dto.category_id {
        sqlx = sqlx.bind(category_id);
    }
    if let Some(start) = range.start {
        sqlx = sqlx.bind(start);
    }
    if let Some(end) = range.end {
        sqlx = sqlx.bind(end);
    }
    if let Some((value, id)) = query.cursor {
        sqlx = match value {
            CursorValue::Integer(value) => sqlx.bind(value),
            CursorValue::Float(value) => sqlx.bind(value),
        };
        sqlx = sqlx.bind(id);
    }

    match sqlx.fetch_all(pool).await {
        Ok(transactions) => Ok(transactions),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn get_transaction_by_id(
    id: &str,
    claims: &Claims,
    pool: &PgPool,
) -> Result<Transaction, ApiError> {
    let sqlx_result = sqlx::query_as::<_, Transaction>(
        "
        SELECT * FROM transactions
        WHERE id = $1 AND user_id = $2
        ",
    )
    .bind(id)
    .bind(&claims.id)
    .fetch_optional(pool)
    .await;

    match sqlx_result {
        Ok(transaction) => match transaction {
            Some(transaction) => Ok(transaction),
            None => Err(TransactionsApiError::TransactionNotFound.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn edit_transaction_by_id(
    id: &str,
    dto: &EditTransactionDto,
    claims: &Claims,
    pool: &PgPool,
    offset: &FixedOffset,
) -> Result<Transaction, ApiError> {
    let sql = dto.to_sql()?;

    let occurred_at = match &dto.occurred_at {
        Some(value) => Some(parse_occurred_at(value, offset)?),
        None => None,
    };

    if let Some(category_id) = &dto.category_id {
        check_category_ownership(category_id, claims, pool).await?;
    }

    let mut sqlx = sqlx::query_as::<_, Transaction>(&sql);

    if let Some(title) = &dto.title {
        sqlx = sqlx.bind(title.trim());
    }
    if let Some(kind) = &dto.kind {
        sqlx = sqlx.bind(kind.value());
    }
    if let Some(amount) = dto.amount {
        sqlx = sqlx.bind(amount);
    }
    if let Some(occurred_at) = occurred_at {
        sqlx = sqlx.bind(occurred_at);
    }
    if let Some(remark) = &dto.remark {
        sqlx = sqlx.bind(remark);
    }
    if let Some(category_id) = &dto.category_id {
        sqlx = sqlx.bind(Some(category_id).filter(|id| !id.is_empty()));
    }
    sqlx = sqlx.bind(time::current_time_in_secs());
    sqlx = sqlx.bind(id);
    sqlx = sqlx.bind(&claims.id);

    match sqlx.fetch_optional(pool).await {
        Ok(transaction) => match transaction {
            Some(transaction) => {
                tracing::info!(user_id = %claims.id, transaction_id = %id, "edited transaction");
                Ok(transaction)
            }
            None => Err(TransactionsApiError::TransactionNotFound.value()),
        },
        Err(e) => Err(map_write_error(e)),
    }
}

pub async fn delete_transaction_by_id(
    id: &str,
    claims: &Claims,
    pool: &PgPool,
) -> Result<(), ApiError> {
    let sqlx_result = sqlx::query(
        "
        DELETE FROM transactions
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
                tracing::info!(user_id = %claims.id, transaction_id = %id, "deleted transaction");
                Ok(())
            }
            false => Err(TransactionsApiError::TransactionNotFound.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn count_transactions_as_admin(pool: &PgPool) -> Result<i64, ApiError> {
    match sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM transactions")
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

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[test]
    fn test_parse_occurred_at_rejects_garbage() {
        let offset = FixedOffset::east_opt(0).unwrap();

        assert_eq!(parse_occurred_at("2024-01-01", &offset).unwrap(), 1_704_067_200);
        assert_eq!(
            parse_occurred_at("yesterday", &offset).unwrap_err().code,
            StatusCode::BAD_REQUEST
        );
    }
}
