use async_trait::async_trait;
use sqlx::PgPool;

use crate::app::util::time::TimeRange;

use super::models::transaction::Transaction;

/// Read access to a user's transactions, optionally bounded by `occurred_at`.
#[async_trait]
pub trait TransactionSource: Send + Sync {
    async fn fetch_transactions(
        &self,
        user_id: &str,
        range: &TimeRange,
    ) -> Result<Vec<Transaction>, sqlx::Error>;
}

#[async_trait]
impl TransactionSource for PgPool {
    async fn fetch_transactions(
        &self,
        user_id: &str,
        range: &TimeRange,
    ) -> Result<Vec<Transaction>, sqlx::Error> {
        sqlx::query_as::<_, Transaction>(
            "
            SELECT * FROM transactions
            WHERE user_id = $1
            AND ($2::BIGINT IS NULL OR occurred_at >= $2)
            AND ($3::BIGINT IS NULL OR occurred_at <= $3)
            ORDER BY occurred_at ASC, id ASC
            ",
        )
        .bind(user_id)
        .bind(range.start)
        .bind(range.end)
        .fetch_all(self)
        .await
    }
}
