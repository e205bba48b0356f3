use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UserRole {
    User,
    Admin,
    SuperAdmin,
}

impl UserRole {
    /// Roles allowed into the admin area.
    pub const ADMINS: [UserRole; 2] = [Self::Admin, Self::SuperAdmin];

    pub fn value(&self) -> &str {
        match *self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::SuperAdmin => "superAdmin",
        }
    }
}

impl TryFrom<String> for UserRole {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            "superAdmin" => Ok(Self::SuperAdmin),
            _ => Err(format!("unknown role: {}", value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_column_value() {
        for role in [UserRole::User, UserRole::Admin, UserRole::SuperAdmin] {
            assert_eq!(UserRole::try_from(role.value().to_string()), Ok(role));
        }
        assert!(UserRole::try_from("root".to_string()).is_err());
    }

    #[test]
    fn test_serde_matches_column_value() {
        let json = serde_json::to_string(&UserRole::SuperAdmin).unwrap();

        assert_eq!(json, "\"superAdmin\"");
        assert!(!UserRole::ADMINS.contains(&UserRole::User));
        assert!(UserRole::ADMINS.contains(&UserRole::Admin));
    }
}
