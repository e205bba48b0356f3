use serde::Deserialize;
use validator::Validate;

use crate::transactions::enums::transaction_kind::TransactionKind;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionDto {
    #[serde(alias = "item")]
    #[validate(
        length(
            min = 1,
            max = 512,
            message = "title must be between 1 and 512 characters."
        ),
        custom = "super::validate_not_blank"
    )]
    pub title: String,
    #[serde(default)]
    pub kind: TransactionKind,
    #[validate(range(
        min = 0.0,
        max = 1000000000000.0,
        message = "amount must be between 0 and 1000000000000."
    ))]
    pub amount: f64,
    #[serde(alias = "time")]
    pub occurred_at: Option<String>,
    #[validate(length(max = 1024, message = "remark must be at most 1024 characters."))]
    pub remark: Option<String>,
    #[validate(custom = "super::validate_category_id")]
    pub category_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_item_and_time_aliases() {
        let dto: CreateTransactionDto = serde_json::from_str(
            r#"{"item": "Lunch", "amount": 12.5, "time": "2024-01-01T12:00"}"#,
        )
        .unwrap();

        assert_eq!(dto.title, "Lunch");
        assert_eq!(dto.kind, TransactionKind::Expense);
        assert_eq!(dto.occurred_at.as_deref(), Some("2024-01-01T12:00"));
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_rejects_negative_amount() {
        let dto: CreateTransactionDto =
            serde_json::from_str(r#"{"title": "Refund", "kind": "income", "amount": -1}"#)
                .unwrap();

        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_rejects_blank_title() {
        let dto: CreateTransactionDto =
            serde_json::from_str(r#"{"title": "   ", "amount": 1}"#).unwrap();

        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_rejects_unknown_kind() {
        let result = serde_json::from_str::<CreateTransactionDto>(
            r#"{"title": "Gift", "kind": "transfer", "amount": 1}"#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_requires_amount() {
        assert!(serde_json::from_str::<CreateTransactionDto>(r#"{"title": "Gift"}"#).is_err());
    }
}
