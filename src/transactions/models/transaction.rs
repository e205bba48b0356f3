use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::{
    app::util::time, auth::jwt::models::claims::Claims,
    transactions::{
        dtos::create_transaction_dto::CreateTransactionDto,
        enums::transaction_kind::TransactionKind,
    },
};

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub category_id: Option<String>,
    pub title: String,
    #[sqlx(try_from = "String")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub occurred_at: i64,
    pub remark: String,
    pub updated_at: i64,
    pub created_at: i64,
}

impl Transaction {
    pub fn new(claims: &Claims, dto: &CreateTransactionDto, occurred_at: Option<i64>) -> Self {
        let current_time = time::current_time_in_secs();

        return Self {
            id: Uuid::new_v4().to_string(),
            user_id: claims.id.to_string(),
            category_id: dto.category_id.to_owned().filter(|id| !id.is_empty()),
            title: dto.title.trim().to_string(),
            kind: dto.kind,
            amount: dto.amount,
            occurred_at: occurred_at.unwrap_or(current_time),
            remark: dto.remark.to_owned().unwrap_or_default(),
            updated_at: current_time,
            created_at: current_time,
        };
    }

    pub fn sortable_fields() -> [&'static str; 3] {
        return ["occurred_at", "created_at", "amount"];
    }
}
