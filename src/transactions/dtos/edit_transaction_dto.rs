use serde::Deserialize;
use validator::Validate;

use crate::{
    app::models::api_error::ApiError, transactions::enums::transaction_kind::TransactionKind,
};

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EditTransactionDto {
    #[serde(alias = "item")]
    #[validate(
        length(
            min = 1,
            max = 512,
            message = "title must be between 1 and 512 characters."
        ),
        custom = "super::validate_not_blank"
    )]
    pub title: Option<String>,
    pub kind: Option<TransactionKind>,
    #[validate(range(
        min = 0.0,
        max = 1000000000000.0,
        message = "amount must be between 0 and 1000000000000."
    ))]
    pub amount: Option<f64>,
    #[serde(alias = "time")]
    pub occurred_at: Option<String>,
    #[validate(length(max = 1024, message = "remark must be at most 1024 characters."))]
    pub remark: Option<String>,
    #[validate(custom = "super::validate_category_id")]
    pub category_id: Option<String>,
}

impl EditTransactionDto {
    /// Binds: each present field in order, then `updated_at`, `id`, `user_id`.
    pub fn to_sql(&self) -> Result<String, ApiError> {
        let mut sql = "UPDATE transactions SET ".to_string();
        let mut clauses = Vec::new();

        let mut index: u8 = 1;

        // SET CLAUSES
        for (field, is_some) in [
            ("title", self.title.is_some()),
            ("kind", self.kind.is_some()),
            ("amount", self.amount.is_some()),
            ("occurred_at", self.occurred_at.is_some()),
            ("remark", self.remark.is_some()),
            ("category_id", self.category_id.is_some()),
        ] {
            if is_some {
                clauses.push([field, " = $", &index.to_string()].concat());
                index += 1;
            }
        }

        // CLAUSES BUILDER
        if clauses.is_empty() {
            return Err(ApiError::bad_request("Received nothing to edit."));
        }

        sql.push_str(&clauses.join(", "));
        sql.push_str(&[", updated_at = $", &index.to_string()].concat());
        sql.push_str(&[" WHERE id = $", &(index + 1).to_string()].concat());
        sql.push_str(&[" AND user_id = $", &(index + 2).to_string()].concat());
        sql.push_str(" RETURNING *");

        tracing::debug!(%sql);

        Ok(sql)
    }
}
