use chrono::FixedOffset;

use crate::{
    app::models::api_error::ApiError, auth::jwt::models::claims::Claims,
    transactions::source::TransactionSource,
};

use super::{
    aggregator, dtos::get_statistics_filter_dto::GetStatisticsFilterDto,
    errors::StatisticsApiError, models::statistics_summary::StatisticsSummary,
};

pub async fn get_statistics<S: TransactionSource + ?Sized>(
    dto: &GetStatisticsFilterDto,
    claims: &Claims,
    source: &S,
    offset: &FixedOffset,
) -> Result<StatisticsSummary, ApiError> {
    let range = dto.to_time_range(offset);

    match source.fetch_transactions(&claims.id, &range).await {
        Ok(transactions) => {
            let summary = aggregator::summarize(&transactions, offset);
            tracing::debug!(user_id = %claims.id, count = summary.count, "summarized transactions");
            Ok(summary)
        }
        Err(e) => {
            tracing::error!(%e);
            Err(StatisticsApiError::FailedToRetrieveStatistics.value())
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use axum::http::StatusCode;

    use super::*;
    use crate::{
        app::util::time::TimeRange,
        transactions::{
            enums::transaction_kind::TransactionKind, models::transaction::Transaction,
        },
        users::enums::user_role::UserRole,
    };

    const JAN_1: i64 = 1_704_067_200;

    struct MemorySource(Vec<Transaction>);

    #[async_trait]
    impl TransactionSource for MemorySource {
        async fn fetch_transactions(
            &self,
            user_id: &str,
            range: &TimeRange,
        ) -> Result<Vec<Transaction>, sqlx::Error> {
            Ok(self
                .0
                .iter()
                .filter(|t| t.user_id == user_id && range.contains(t.occurred_at))
                .cloned()
                .collect())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl TransactionSource for FailingSource {
        async fn fetch_transactions(
            &self,
            _user_id: &str,
            _range: &TimeRange,
        ) -> Result<Vec<Transaction>, sqlx::Error> {
            Err(sqlx::Error::PoolTimedOut)
        }
    }

    fn claims(id: &str) -> Claims {
        Claims {
            id: id.to_string(),
            role: UserRole::User,
            iat: 0,
            exp: i64::MAX,
        }
    }

    fn transaction(user_id: &str, kind: TransactionKind, amount: f64, at: i64) -> Transaction {
        Transaction {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            category_id: None,
            title: "entry".to_string(),
            kind,
            amount,
            occurred_at: at,
            remark: String::new(),
            updated_at: at,
            created_at: at,
        }
    }

    fn source() -> MemorySource {
        MemorySource(vec![
            transaction("alice", TransactionKind::Income, 100.0, JAN_1 + 60),
            transaction("alice", TransactionKind::Expense, 40.0, JAN_1 + 120),
            transaction("alice", TransactionKind::Income, 50.0, JAN_1 + 86_400 + 60),
            transaction("bob", TransactionKind::Expense, 999.0, JAN_1 + 60),
        ])
    }

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test_log::test(tokio::test)]
    async fn test_summarizes_only_the_callers_records() {
        let source = source();
        let dto = GetStatisticsFilterDto::default();

        let alice = get_statistics(&dto, &claims("alice"), &source, &utc())
            .await
            .unwrap();
        let bob = get_statistics(&dto, &claims("bob"), &source, &utc())
            .await
            .unwrap();

        assert_eq!(alice.total_income, 150.0);
        assert_eq!(alice.total_expense, 40.0);
        assert_eq!(alice.balance, 110.0);
        assert_eq!(alice.count, 3);
        assert_eq!(bob.total_expense, 999.0);
        assert_eq!(bob.total_income, 0.0);
        assert_eq!(bob.count, 1);
    }

    #[test_log::test(tokio::test)]
    async fn test_date_window_bounds_records() {
        let dto = GetStatisticsFilterDto {
            start_date: Some("2024-01-02".to_string()),
            end_date: Some("2024-01-02".to_string()),
        };

        let summary = get_statistics(&dto, &claims("alice"), &source(), &utc())
            .await
            .unwrap();

        assert_eq!(summary.total_income, 50.0);
        assert_eq!(summary.count, 1);
        assert_eq!(summary.date_data.len(), 1);
    }

    #[test_log::test(tokio::test)]
    async fn test_window_excluding_everything_is_zeroed() {
        let dto = GetStatisticsFilterDto {
            start_date: Some("2023-06-01".to_string()),
            end_date: Some("2023-06-30".to_string()),
        };

        let summary = get_statistics(&dto, &claims("alice"), &source(), &utc())
            .await
            .unwrap();

        assert_eq!(summary, StatisticsSummary::default());
    }

    #[test_log::test(tokio::test)]
    async fn test_malformed_dates_apply_no_bound() {
        let dto = GetStatisticsFilterDto {
            start_date: Some("01/02/2024".to_string()),
            end_date: Some("".to_string()),
        };

        let summary = get_statistics(&dto, &claims("alice"), &source(), &utc())
            .await
            .unwrap();

        assert_eq!(summary.count, 3);
    }

    #[test_log::test(tokio::test)]
    async fn test_storage_failure_is_opaque() {
        let e = get_statistics(
            &GetStatisticsFilterDto::default(),
            &claims("alice"),
            &FailingSource,
            &utc(),
        )
        .await
        .unwrap_err();

        assert_eq!(e.code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.message, "Failed to retrieve statistics.");
    }
}
