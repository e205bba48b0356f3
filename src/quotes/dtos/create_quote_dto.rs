use serde::Deserialize;
use validator::Validate;

use crate::quotes::enums::quote_category::QuoteCategory;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuoteDto {
    #[validate(length(
        min = 1,
        max = 512,
        message = "content must be between 1 and 512 characters."
    ))]
    pub content: String,
    #[validate(length(
        min = 1,
        max = 64,
        message = "author must be between 1 and 64 characters."
    ))]
    pub author: String,
    #[serde(default)]
    pub category: QuoteCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_defaults_to_other() {
        let dto: CreateQuoteDto =
            serde_json::from_str(r#"{"content": "Keep going.", "author": "Anon"}"#).unwrap();

        assert_eq!(dto.category, QuoteCategory::Other);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_author() {
        let dto: CreateQuoteDto =
            serde_json::from_str(r#"{"content": "Keep going.", "author": ""}"#).unwrap();

        assert!(dto.validate().is_err());
    }
}
