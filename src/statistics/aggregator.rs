use std::collections::BTreeMap;

use chrono::{FixedOffset, NaiveDate};

use crate::{
    app::util::time,
    transactions::{enums::transaction_kind::TransactionKind, models::transaction::Transaction},
};

use super::models::statistics_summary::{CategoryData, CategoryValue, DateData, StatisticsSummary};

#[derive(Debug, Default)]
struct DayTotals {
    income: f64,
    expense: f64,
}

#[derive(Debug, Default)]
struct KindTotals {
    sum: f64,
    seen: bool,
}

impl KindTotals {
    fn add(&mut self, amount: f64) {
        self.sum += amount;
        self.seen = true;
    }

    fn bucket(&self, kind: TransactionKind) -> Vec<CategoryValue> {
        match self.seen {
            true => vec![CategoryValue {
                name: kind.value().to_string(),
                value: self.sum,
            }],
            false => Vec::new(),
        }
    }
}

/// Reduces already fetched transactions into totals, one bucket per kind and an ascending
/// per-day series. Days are calendar dates at `offset`.
pub fn summarize(transactions: &[Transaction], offset: &FixedOffset) -> StatisticsSummary {
    let mut income = KindTotals::default();
    let mut expense = KindTotals::default();
    let mut days: BTreeMap<NaiveDate, DayTotals> = BTreeMap::new();

    for transaction in transactions {
        let Some(date) = time::calendar_date(transaction.occurred_at, offset)
        else {
            tracing::warn!(
                transaction_id = %transaction.id,
                occurred_at = transaction.occurred_at,
                "skipping transaction with unmappable timestamp"
            );
            continue;
        };

        let day = days.entry(date).or_default();

        match transaction.kind {
            TransactionKind::Income => {
                income.add(transaction.amount);
                day.income += transaction.amount;
            }
            TransactionKind::Expense => {
                expense.add(transaction.amount);
                day.expense += transaction.amount;
            }
        }
    }

    let date_data = days
        .into_iter()
        .map(|(date, totals)| DateData {
            date,
            income: totals.income,
            expense: totals.expense,
            total: totals.income - totals.expense,
        })
        .collect();

    StatisticsSummary {
        total_income: income.sum,
        total_expense: expense.sum,
        balance: income.sum - expense.sum,
        category_data: CategoryData {
            income: income.bucket(TransactionKind::Income),
            expense: expense.bucket(TransactionKind::Expense),
        },
        date_data,
        count: transactions.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JAN_1: i64 = 1_704_067_200;
    const DAY: i64 = time::SECONDS_PER_DAY;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn transaction(kind: TransactionKind, amount: f64, occurred_at: i64) -> Transaction {
        Transaction {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: "owner".to_string(),
            category_id: None,
            title: "entry".to_string(),
            kind,
            amount,
            occurred_at,
            remark: String::new(),
            updated_at: occurred_at,
            created_at: occurred_at,
        }
    }

    fn date(value: &str) -> NaiveDate {
        time::parse_calendar_date(value).unwrap()
    }

    #[test]
    fn test_two_day_scenario() {
        let transactions = vec![
            transaction(TransactionKind::Income, 100.0, JAN_1 + 3600),
            transaction(TransactionKind::Expense, 40.0, JAN_1 + 7200),
            transaction(TransactionKind::Income, 50.0, JAN_1 + DAY + 60),
        ];

        let summary = summarize(&transactions, &utc());

        assert_eq!(summary.total_income, 150.0);
        assert_eq!(summary.total_expense, 40.0);
        assert_eq!(summary.balance, 110.0);
        assert_eq!(summary.count, 3);
        assert_eq!(
            summary.date_data,
            vec![
                DateData {
                    date: date("2024-01-01"),
                    income: 100.0,
                    expense: 40.0,
                    total: 60.0,
                },
                DateData {
                    date: date("2024-01-02"),
                    income: 50.0,
                    expense: 0.0,
                    total: 50.0,
                },
            ]
        );
        assert_eq!(
            summary.category_data.income,
            vec![CategoryValue {
                name: "income".to_string(),
                value: 150.0,
            }]
        );
        assert_eq!(summary.category_data.expense[0].value, 40.0);
    }

    #[test]
    fn test_empty_input_is_zeroed() {
        assert_eq!(summarize(&[], &utc()), StatisticsSummary::default());
    }

    #[test]
    fn test_missing_kind_has_empty_bucket() {
        let transactions = vec![transaction(TransactionKind::Expense, 12.0, JAN_1)];

        let summary = summarize(&transactions, &utc());

        assert!(summary.category_data.income.is_empty());
        assert_eq!(summary.category_data.expense.len(), 1);
        assert_eq!(summary.balance, -12.0);
    }

    #[test]
    fn test_dates_ascend_and_reconcile() {
        let transactions = vec![
            transaction(TransactionKind::Expense, 5.25, JAN_1 + 9 * DAY),
            transaction(TransactionKind::Income, 20.0, JAN_1 + 2 * DAY),
            transaction(TransactionKind::Expense, 1.5, JAN_1),
            transaction(TransactionKind::Income, 7.0, JAN_1 + 9 * DAY + 10),
            transaction(TransactionKind::Expense, 3.0, JAN_1 + 2 * DAY + 50),
        ];

        let summary = summarize(&transactions, &utc());

        let dates: Vec<NaiveDate> = summary.date_data.iter().map(|day| day.date).collect();
        assert_eq!(
            dates,
            vec![date("2024-01-01"), date("2024-01-03"), date("2024-01-10")]
        );

        let income: f64 = summary.date_data.iter().map(|day| day.income).sum();
        let expense: f64 = summary.date_data.iter().map(|day| day.expense).sum();
        assert!((income - summary.total_income).abs() < 1e-9);
        assert!((expense - summary.total_expense).abs() < 1e-9);
        assert!((summary.total_income - summary.total_expense - summary.balance).abs() < 1e-9);
        assert_eq!(summary.count, transactions.len());
    }

    #[test]
    fn test_days_follow_offset() {
        // 16:30 UTC is already the next day at +08:00.
        let transactions = vec![transaction(TransactionKind::Income, 1.0, JAN_1 + 16 * 3600 + 1800)];

        let utc_summary = summarize(&transactions, &utc());
        let shanghai_summary = summarize(&transactions, &FixedOffset::east_opt(8 * 3600).unwrap());

        assert_eq!(utc_summary.date_data[0].date, date("2024-01-01"));
        assert_eq!(shanghai_summary.date_data[0].date, date("2024-01-02"));
    }

    #[test]
    fn test_unmappable_timestamp_is_skipped_but_counted() {
        let transactions = vec![
            transaction(TransactionKind::Income, 10.0, JAN_1),
            transaction(TransactionKind::Income, 99.0, i64::MAX),
        ];

        let summary = summarize(&transactions, &utc());

        assert_eq!(summary.total_income, 10.0);
        assert_eq!(summary.date_data.len(), 1);
        assert_eq!(summary.count, 2);
    }
}
