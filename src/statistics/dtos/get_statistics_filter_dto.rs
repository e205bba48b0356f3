use chrono::FixedOffset;
use serde::Deserialize;

use crate::app::util::time::TimeRange;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetStatisticsFilterDto {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl GetStatisticsFilterDto {
    pub fn to_time_range(&self, offset: &FixedOffset) -> TimeRange {
        TimeRange::from_dates(self.start_date.as_deref(), self.end_date.as_deref(), offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_date_is_inclusive() {
        let dto: GetStatisticsFilterDto =
            serde_json::from_str(r#"{"startDate": "2024-01-01", "endDate": "2024-01-01"}"#)
                .unwrap();
        let range = dto.to_time_range(&FixedOffset::east_opt(0).unwrap());

        assert!(range.contains(1_704_067_200));
        assert!(range.contains(1_704_153_599));
        assert!(!range.contains(1_704_153_600));
    }
}
