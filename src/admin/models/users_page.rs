use serde::Serialize;

use crate::users::models::user::User;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersPage {
    pub users: Vec<User>,
    pub total: i64,
    pub page: u32,
    pub page_size: u32,
}
