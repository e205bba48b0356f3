use serde::Deserialize;
use validator::Validate;

use crate::transactions::enums::transaction_kind::TransactionKind;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryDto {
    #[validate(length(
        min = 1,
        max = 32,
        message = "name must be between 1 and 32 characters."
    ))]
    pub name: String,
    pub kind: TransactionKind,
    #[validate(length(max = 64, message = "icon must be at most 64 characters."))]
    pub icon: Option<String>,
}
