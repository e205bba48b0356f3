use axum::{
    headers::{authorization::Bearer, Authorization},
    http::StatusCode,
};
use jsonwebtoken::errors::ErrorKind;
use serde::{Deserialize, Serialize};

use crate::{
    app::models::api_error::ApiError, auth::jwt::util::decode_jwt,
    users::enums::user_role::UserRole,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub id: String,
    pub role: UserRole,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn from_header(
        authorization: Authorization<Bearer>,
        secret: &str,
    ) -> Result<Self, ApiError> {
        match decode_jwt(authorization.0.token(), secret) {
            Ok(claims) => Ok(claims),
            Err(e) => match e {
                ErrorKind::ExpiredSignature => Err(ApiError {
                    code: StatusCode::UNAUTHORIZED,
                    message: "Token expired.".to_string(),
                }),
                _ => Err(ApiError {
                    code: StatusCode::UNAUTHORIZED,
                    message: "Invalid token.".to_string(),
                }),
            },
        }
    }
}
