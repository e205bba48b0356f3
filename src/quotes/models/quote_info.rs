use serde::Serialize;

use crate::{quotes::enums::quote_category::QuoteCategory, users::models::user_quote::UserQuote};

use super::quote::Quote;

/// The quote shown to a user: their own when set, a system quote otherwise.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteInfo {
    pub content: String,
    pub author: String,
    pub category: Option<QuoteCategory>,
    pub is_user_custom: bool,
}

impl From<UserQuote> for QuoteInfo {
    fn from(quote: UserQuote) -> Self {
        Self {
            content: quote.content,
            author: quote.author,
            category: None,
            is_user_custom: true,
        }
    }
}

impl From<Quote> for QuoteInfo {
    fn from(quote: Quote) -> Self {
        Self {
            content: quote.content,
            author: quote.author,
            category: Some(quote.category),
            is_user_custom: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_user_quotes_as_custom() {
        let info = QuoteInfo::from(UserQuote {
            content: "Mine.".to_string(),
            author: "alice".to_string(),
            updated_at: 0,
        });
        assert!(info.is_user_custom);
        assert!(info.category.is_none());

        let info = QuoteInfo::from(Quote::new(" Theirs. ", "Anon", QuoteCategory::Life));
        assert!(!info.is_user_custom);
        assert_eq!(info.content, "Theirs.");
        assert_eq!(info.category, Some(QuoteCategory::Life));
    }
}
