use serde::Deserialize;
use validator::Validate;

pub static DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GetUsersFilterDto {
    #[validate(range(min = 1, message = "page must be at least 1."))]
    pub page: Option<u32>,
    #[validate(range(min = 1, max = 100, message = "pageSize must be between 1 and 100."))]
    pub page_size: Option<u32>,
    #[validate(length(max = 24, message = "search must be at most 24 characters."))]
    pub search: Option<String>,
}

impl GetUsersFilterDto {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }

    pub fn page_size(&self) -> u32 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// LIKE pattern for the search term, with wildcards in the term escaped.
    pub fn search_pattern(&self) -> Option<String> {
        let search = self.search.as_ref()?.trim();
        if search.is_empty() {
            return None;
        }

        let mut pattern = String::with_capacity(search.len() + 2);
        pattern.push('%');
        for c in search.to_lowercase().chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');

        Some(pattern)
    }

    pub fn to_sql(&self) -> String {
        let mut sql = "SELECT * FROM users".to_string();

        // WHERE CLAUSES
        if self.search_pattern().is_some() {
            sql.push_str(" WHERE username_key LIKE $1");
        }

        // ORDER BY
        sql.push_str(
            " ORDER BY CASE role WHEN 'superAdmin' THEN 3 WHEN 'admin' THEN 2 WHEN 'user' THEN 1 ELSE 0 END DESC, created_at DESC, id DESC",
        );

        // PAGINATION
        let offset = (self.page() as u64 - 1) * self.page_size() as u64;
        sql.push_str(&[" LIMIT ", &self.page_size().to_string()].concat());
        sql.push_str(&[" OFFSET ", &offset.to_string()].concat());

        tracing::debug!(%sql);

        sql
    }

    pub fn to_count_sql(&self) -> String {
        let mut sql = "SELECT COUNT(*) FROM users".to_string();

        if self.search_pattern().is_some() {
            sql.push_str(" WHERE username_key LIKE $1");
        }

        sql
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let dto = GetUsersFilterDto::default();

        assert_eq!(
            dto.to_sql(),
            "SELECT * FROM users ORDER BY CASE role WHEN 'superAdmin' THEN 3 WHEN 'admin' THEN 2 WHEN 'user' THEN 1 ELSE 0 END DESC, created_at DESC, id DESC LIMIT 10 OFFSET 0"
        );
        assert_eq!(dto.to_count_sql(), "SELECT COUNT(*) FROM users");
    }

    #[test]
    fn test_search_and_paging() {
        let dto = GetUsersFilterDto {
            page: Some(3),
            page_size: Some(20),
            search: Some("Bob".to_string()),
        };
        let sql = dto.to_sql();

        assert!(sql.contains(" WHERE username_key LIKE $1"));
        assert!(sql.ends_with(" LIMIT 20 OFFSET 40"));
        assert_eq!(dto.search_pattern().as_deref(), Some("%bob%"));
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let dto = GetUsersFilterDto {
            search: Some("  ".to_string()),
            ..Default::default()
        };

        assert_eq!(dto.search_pattern(), None);
        assert!(!dto.to_sql().contains("WHERE"));
    }

    #[test]
    fn test_search_escapes_wildcards() {
        let dto = GetUsersFilterDto {
            search: Some("a_b%".to_string()),
            ..Default::default()
        };

        assert_eq!(dto.search_pattern().as_deref(), Some("%a\\_b\\%%"));
    }

    #[test]
    fn test_validation_bounds() {
        let dto = GetUsersFilterDto {
            page: Some(0),
            page_size: Some(101),
            search: None,
        };

        assert!(dto.validate().is_err());
    }
}
