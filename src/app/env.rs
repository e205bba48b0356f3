use chrono::FixedOffset;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub port: Option<u16>,

    pub database_url: String,
    pub database_max_connections: Option<u32>,

    pub jwt_secret: String,

    pub utc_offset_minutes: Option<i32>,

    pub super_admin_username: Option<String>,
    pub super_admin_password: Option<String>,
}

fn default_app_env() -> String {
    "development".to_string()
}

impl Envy {
    /// Offset every calendar date is computed in. Defaults to UTC.
    pub fn utc_offset(&self) -> Option<FixedOffset> {
        let minutes = self.utc_offset_minutes.unwrap_or(0);

        FixedOffset::east_opt(minutes.checked_mul(60)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envy(utc_offset_minutes: Option<i32>) -> Envy {
        Envy {
            app_env: "test".to_string(),
            port: None,
            database_url: "postgres://localhost/ledger".to_string(),
            database_max_connections: None,
            jwt_secret: "secret".to_string(),
            utc_offset_minutes,
            super_admin_username: None,
            super_admin_password: None,
        }
    }

    #[test]
    fn test_utc_offset_defaults_to_utc() {
        assert_eq!(envy(None).utc_offset(), FixedOffset::east_opt(0));
    }

    #[test]
    fn test_utc_offset_from_minutes() {
        assert_eq!(envy(Some(480)).utc_offset(), FixedOffset::east_opt(8 * 3600));
        assert_eq!(envy(Some(-300)).utc_offset(), FixedOffset::west_opt(5 * 3600));
    }

    #[test]
    fn test_utc_offset_out_of_range() {
        assert_eq!(envy(Some(24 * 60)).utc_offset(), None);
    }
}
