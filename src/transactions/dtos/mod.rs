use validator::ValidationError;

pub mod create_transaction_dto;
pub mod edit_transaction_dto;
pub mod get_transactions_filter_dto;

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    match value.trim().is_empty() {
        true => Err(ValidationError::new("blank")),
        false => Ok(()),
    }
}

/// Empty clears the category; anything else must look like an id.
pub fn validate_category_id(value: &str) -> Result<(), ValidationError> {
    match value.is_empty() || value.len() == 36 {
        true => Ok(()),
        false => Err(ValidationError::new("category_id")),
    }
}
