use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct EditUserQuoteDto {
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
    pub author: Option<String>,
}
