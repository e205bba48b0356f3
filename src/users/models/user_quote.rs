use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuote {
    pub content: String,
    pub author: String,
    pub updated_at: i64,
}
