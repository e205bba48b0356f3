use regex::Regex;
use validator::ValidationError;

pub mod login_dto;
pub mod register_dto;

lazy_static! {
    pub static ref USERNAME_REGEX: Regex = Regex::new(r"^[a-zA-Z0-9_.-]{3,24}$").unwrap();
}

pub fn validate_username(value: &str) -> Result<(), ValidationError> {
    match USERNAME_REGEX.is_match(value) {
        true => Ok(()),
        false => Err(ValidationError::new("username_validation")),
    }
}
