use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterDto {
    #[validate(custom = "super::validate_username")]
    pub username: String,
    #[validate(length(
        min = 6,
        max = 128,
        message = "password must be between 6 and 128 characters."
    ))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(username: &str, password: &str) -> RegisterDto {
        RegisterDto {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_registration() {
        assert!(dto("alice_01", "secret1").validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_usernames() {
        assert!(dto("al", "secret1").validate().is_err());
        assert!(dto("alice smith", "secret1").validate().is_err());
        assert!(dto("a".repeat(25).as_str(), "secret1").validate().is_err());
    }

    #[test]
    fn test_rejects_short_password() {
        assert!(dto("alice", "12345").validate().is_err());
    }
}
