use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::{app::util::time, quotes::enums::quote_category::QuoteCategory};

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    pub content: String,
    pub author: String,
    #[sqlx(try_from = "String")]
    pub category: QuoteCategory,
    pub created_at: i64,
}

impl Quote {
    pub fn new(content: &str, author: &str, category: QuoteCategory) -> Self {
        return Self {
            id: Uuid::new_v4().to_string(),
            content: content.trim().to_string(),
            author: author.trim().to_string(),
            category,
            created_at: time::current_time_in_secs(),
        };
    }
}
