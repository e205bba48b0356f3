use argon2::{
    password_hash::{self, rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use tokio::task;

use crate::app::models::app_error::AppError;

pub async fn hash(password: String) -> Result<String, AppError> {
    let result = task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
    })
    .await;

    match result {
        Ok(Ok(hash)) => Ok(hash),
        Ok(Err(e)) => Err(AppError::new(format!("failed to hash password: {}", e))),
        Err(e) => Err(AppError::new(format!("hashing task failed: {}", e))),
    }
}

pub async fn verify(password: String, hash: String) -> Result<bool, AppError> {
    let result = task::spawn_blocking(move || {
        let parsed_hash = PasswordHash::new(&hash)?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(_) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(e),
        }
    })
    .await;

    match result {
        Ok(Ok(matches)) => Ok(matches),
        Ok(Err(e)) => Err(AppError::new(format!("failed to verify password: {}", e))),
        Err(e) => Err(AppError::new(format!("verifying task failed: {}", e))),
    }
}
