use serde::Deserialize;
use validator::Validate;

use crate::{
    app::models::api_error::ApiError, transactions::enums::transaction_kind::TransactionKind,
};

#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditCategoryDto {
    #[validate(length(
        min = 1,
        max = 32,
        message = "name must be between 1 and 32 characters."
    ))]
    pub name: Option<String>,
    pub kind: Option<TransactionKind>,
    #[validate(length(max = 64, message = "icon must be at most 64 characters."))]
    pub icon: Option<String>,
}

impl EditCategoryDto {
    /// Binds: each present field in order, then `updated_at`, `id`, `user_id`.
    pub fn to_sql(&self) -> Result<String, ApiError> {
        let mut sql = "UPDATE categories SET ".to_string();
        let mut clauses = Vec::new();

        let mut index: u8 = 1;

        // SET CLAUSES
        if self.name.is_some() {
            clauses.push(["name = $", &index.to_string()].concat());
            index += 1;
        }
        if self.kind.is_some() {
            clauses.push(["kind = $", &index.to_string()].concat());
            index += 1;
        }
        if self.icon.is_some() {
            clauses.push(["icon = $", &index.to_string()].concat());
            index += 1;
        }

        // CLAUSES BUILDER
        if clauses.is_empty() {
            return Err(ApiError::bad_request("Received nothing to edit."));
        }

        sql.push_str(&clauses.join(", "));
        sql.push_str(&[", updated_at = $", &index.to_string()].concat());
        sql.push_str(&[" WHERE id = $", &(index + 1).to_string()].concat());
        sql.push_str(&[" AND user_id = $", &(index + 2).to_string()].concat());
        sql.push_str(" RETURNING *");

        tracing::debug!(%sql);

        Ok(sql)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_sql_numbers_binds_in_order() {
        let dto = EditCategoryDto {
            name: Some("Rent".to_string()),
            kind: None,
            icon: Some("house".to_string()),
        };

        assert_eq!(
            dto.to_sql().unwrap(),
            "UPDATE categories SET name = $1, icon = $2, updated_at = $3 WHERE id = $4 AND user_id = $5 RETURNING *"
        );
    }

    #[test]
    fn test_to_sql_rejects_empty_edit() {
        let error = EditCategoryDto::default().to_sql().unwrap_err();

        assert_eq!(error.message, "Received nothing to edit.");
    }
}
