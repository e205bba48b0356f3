use std::borrow::Cow;

use sqlx::error::DatabaseError;

#[non_exhaustive]
pub struct SqlStateCodes;

impl SqlStateCodes {
    pub const UNIQUE_VIOLATION: &str = "23505";
    pub const FOREIGN_KEY_VIOLATION: &str = "23503";
}

pub fn get_code_from_db_err(db_err: &dyn DatabaseError) -> Option<String> {
    match db_err.code() {
        Some(code) => match code {
            Cow::Borrowed(val) => Some(val.to_owned()),
            Cow::Owned(val) => Some(val),
        },
        None => None,
    }
}

/// SQLSTATE of a failed query, if the database reported one.
pub fn get_code_from_err(e: &sqlx::Error) -> Option<String> {
    e.as_database_error()
        .and_then(|db_err| get_code_from_db_err(db_err))
}
