use serde::Deserialize;
use validator::Validate;

use crate::{
    app::{models::api_error::ApiError, util::time::TimeRange},
    transactions::{enums::transaction_kind::TransactionKind, models::transaction::Transaction},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CursorValue {
    Integer(i64),
    Float(f64),
}

/// SQL for a page of transactions. Binds: `user_id`, then each present filter in field order,
/// then the cursor value and id.
#[derive(Debug)]
pub struct TransactionsQuery {
    pub sql: String,
    pub cursor: Option<(CursorValue, String)>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GetTransactionsFilterDto {
    pub kind: Option<TransactionKind>,
    #[validate(length(equal = 36, message = "categoryId must be 36 characters."))]
    pub category_id: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub sort: Option<String>,
    pub cursor: Option<String>,
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100."))]
    pub limit: Option<u8>,
}

impl GetTransactionsFilterDto {
    pub fn to_sql(&self, range: &TimeRange) -> Result<TransactionsQuery, ApiError> {
        let mut sql = "SELECT * FROM transactions WHERE user_id = $1".to_string();
        let mut clauses = Vec::new();

        let mut sort_field = "occurred_at".to_string();
        let mut sort_order = "DESC".to_string();
        let mut page_limit: u8 = 50;

        let mut index: u8 = 1;

        // WHERE CLAUSES
        if self.kind.is_some() {
            index += 1;
            clauses.push(["kind = $", &index.to_string()].concat());
        }
        if self.category_id.is_some() {
            index += 1;
            clauses.push(["category_id = $", &index.to_string()].concat());
        }
        if range.start.is_some() {
            index += 1;
            clauses.push(["occurred_at >= $", &index.to_string()].concat());
        }
        if range.end.is_some() {
            index += 1;
            clauses.push(["occurred_at <= $", &index.to_string()].concat());
        }

        // SORT
        if let Some(sort) = &self.sort {
            let sort_params: Vec<&str> = sort.split(',').collect();

            if sort_params.len() != 2 {
                return Err(ApiError::bad_request("Malformed sort query."));
            }
            if !Transaction::sortable_fields().contains(&sort_params[0]) {
                return Err(ApiError::bad_request("Invalid sort field."));
            }

            sort_field = sort_params[0].to_string();
            sort_order = sort_params[1].to_uppercase();

            if sort_order != "ASC" && sort_order != "DESC" {
                return Err(ApiError::bad_request("Malformed sort query."));
            }
        }

        // CURSOR
        let mut cursor = None;

        if let Some(raw_cursor) = &self.cursor {
            let Some((raw_value, cursor_id)) = raw_cursor.split_once(',')
            else {
                return Err(ApiError::bad_request("Malformed cursor."));
            };

            let value = match sort_field.as_str() {
                "amount" => raw_value.parse::<f64>().ok().map(CursorValue::Float),
                _ => raw_value.parse::<i64>().ok().map(CursorValue::Integer),
            };
            let Some(value) = value
            else {
                return Err(ApiError::bad_request("Malformed cursor."));
            };

            let direction = match sort_order.as_str() {
                "ASC" => ">",
                _ => "<",
            };

            clauses.push(
                [
                    "(",
                    &sort_field,
                    ", id) ",
                    direction,
                    " ($",
                    &(index + 1).to_string(),
                    ", $",
                    &(index + 2).to_string(),
                    ")",
                ]
                .concat(),
            );

            cursor = Some((value, cursor_id.to_string()));
        }

        // CLAUSES BUILDER
        for clause in clauses {
            sql.push_str(" AND ");
            sql.push_str(&clause);
        }

        // ORDER BY
        sql.push_str(&[" ORDER BY ", &sort_field, " ", &sort_order].concat());
        sql.push_str(&[", id ", &sort_order].concat());

        // LIMIT
        if let Some(limit) = self.limit {
            page_limit = limit;
        }

        sql.push_str(&[" LIMIT ", &page_limit.to_string()].concat());

        tracing::debug!(%sql);

        Ok(TransactionsQuery { sql, cursor })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query() {
        let query = GetTransactionsFilterDto::default()
            .to_sql(&TimeRange::default())
            .unwrap();

        assert_eq!(
            query.sql,
            "SELECT * FROM transactions WHERE user_id = $1 ORDER BY occurred_at DESC, id DESC LIMIT 50"
        );
        assert!(query.cursor.is_none());
    }

    #[test]
    fn test_filters_and_cursor_are_numbered() {
        let dto = GetTransactionsFilterDto {
            kind: Some(TransactionKind::Income),
            sort: Some("amount,asc".to_string()),
            cursor: Some("12.5,7f1c".to_string()),
            limit: Some(10),
            ..Default::default()
        };
        let range = TimeRange {
            start: Some(0),
            end: None,
        };

        let query = dto.to_sql(&range).unwrap();

        assert_eq!(
            query.sql,
            "SELECT * FROM transactions WHERE user_id = $1 AND kind = $2 AND occurred_at >= $3 AND (amount, id) > ($4, $5) ORDER BY amount ASC, id ASC LIMIT 10"
        );
        assert_eq!(
            query.cursor,
            Some((CursorValue::Float(12.5), "7f1c".to_string()))
        );
    }

    #[test]
    fn test_rejects_unknown_sort_field() {
        let dto = GetTransactionsFilterDto {
            sort: Some("password_hash,asc".to_string()),
            ..Default::default()
        };

        assert_eq!(
            dto.to_sql(&TimeRange::default()).unwrap_err().message,
            "Invalid sort field."
        );
    }

    #[test]
    fn test_rejects_malformed_cursor() {
        let dto = GetTransactionsFilterDto {
            cursor: Some("1700000000'; DROP TABLE users; --,x".to_string()),
            ..Default::default()
        };

        assert_eq!(
            dto.to_sql(&TimeRange::default()).unwrap_err().message,
            "Malformed cursor."
        );
    }
}
