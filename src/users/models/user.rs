use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::{app::util::time, users::enums::user_role::UserRole};

use super::user_quote::UserQuote;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub username_key: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[sqlx(try_from = "String")]
    pub role: UserRole,
    #[serde(skip_serializing)]
    pub quote_content: Option<String>,
    #[serde(skip_serializing)]
    pub quote_author: Option<String>,
    #[serde(skip_serializing)]
    pub quote_updated_at: Option<i64>,
    pub last_login_at: Option<i64>,
    pub updated_at: i64,
    pub created_at: i64,
}

impl User {
    pub fn new(username: &str, password_hash: String, role: UserRole) -> Self {
        let current_time = time::current_time_in_secs();

        return Self {
            id: Uuid::new_v4().to_string(),
            username: username.to_string(),
            username_key: username.to_lowercase(),
            password_hash,
            role,
            quote_content: None,
            quote_author: None,
            quote_updated_at: None,
            last_login_at: None,
            updated_at: current_time,
            created_at: current_time,
        };
    }

    /// The user's own quote. The author falls back to the username.
    pub fn quote(&self) -> Option<UserQuote> {
        let content = self.quote_content.as_ref()?;
        if content.is_empty() {
            return None;
        }

        Some(UserQuote {
            content: content.to_string(),
            author: match &self.quote_author {
                Some(author) if !author.is_empty() => author.to_string(),
                _ => self.username.to_string(),
            },
            updated_at: self.quote_updated_at.unwrap_or(self.updated_at),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_keys_username_case_insensitively() {
        let user = User::new("Alice", "hash".to_string(), UserRole::User);

        assert_eq!(user.username, "Alice");
        assert_eq!(user.username_key, "alice");
        assert_eq!(user.id.len(), 36);
        assert!(user.quote().is_none());
    }

    #[test]
    fn test_quote_author_defaults_to_username() {
        let mut user = User::new("alice", "hash".to_string(), UserRole::User);
        user.quote_content = Some("Spend less than you earn.".to_string());
        user.quote_updated_at = Some(42);

        let quote = user.quote().unwrap();

        assert_eq!(quote.author, "alice");
        assert_eq!(quote.updated_at, 42);
    }

    #[test]
    fn test_serialized_user_hides_secrets() {
        let user = User::new("alice", "secret-hash".to_string(), UserRole::Admin);
        let json = serde_json::to_value(&user).unwrap();

        assert!(json.get("passwordHash").is_none());
        assert!(json.get("usernameKey").is_none());
        assert_eq!(json["role"], "admin");
    }
}
