use serde::Deserialize;

use crate::transactions::enums::transaction_kind::TransactionKind;

#[derive(Debug, Default, Deserialize)]
pub struct GetCategoriesFilterDto {
    pub kind: Option<TransactionKind>,
}
