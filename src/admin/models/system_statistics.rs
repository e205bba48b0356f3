use serde::Serialize;

#[derive(Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStatistics {
    pub total_users: i64,
    pub total_transactions: i64,
    /// Users who logged in during the last 24 hours.
    pub today_active_users: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let statistics = SystemStatistics {
            total_users: 3,
            total_transactions: 42,
            today_active_users: 1,
        };

        assert_eq!(
            serde_json::to_value(&statistics).unwrap(),
            serde_json::json!({
                "totalUsers": 3,
                "totalTransactions": 42,
                "todayActiveUsers": 1,
            })
        );
    }
}
