use serde::Deserialize;

use crate::users::enums::user_role::UserRole;

#[derive(Debug, Deserialize)]
pub struct EditUserRoleDto {
    pub role: UserRole,
}
