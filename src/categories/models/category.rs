use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::{
    app::util::time, categories::dtos::create_category_dto::CreateCategoryDto,
    transactions::enums::transaction_kind::TransactionKind,
};

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[sqlx(try_from = "String")]
    pub kind: TransactionKind,
    pub icon: String,
    pub updated_at: i64,
    pub created_at: i64,
}

impl Category {
    pub fn new(user_id: &str, dto: &CreateCategoryDto) -> Self {
        let current_time = time::current_time_in_secs();

        return Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            name: dto.name.trim().to_string(),
            kind: dto.kind,
            icon: dto.icon.to_owned().unwrap_or_default(),
            updated_at: current_time,
            created_at: current_time,
        };
    }
}
