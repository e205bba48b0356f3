use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct LoginDto {
    #[validate(length(min = 1, max = 24, message = "username is required."))]
    pub username: String,
    #[validate(length(min = 1, max = 128, message = "password is required."))]
    pub password: String,
}
