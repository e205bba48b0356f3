use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};

pub const SECONDS_PER_DAY: i64 = 86_400;

const LOCAL_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

pub fn current_time_in_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

/// Inclusive bounds in epoch seconds. A missing bound is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeRange {
    pub start: Option<i64>,
    pub end: Option<i64>,
}

impl TimeRange {
    /// Day bounds from `YYYY-MM-DD` strings. Malformed dates leave that side unbounded.
    pub fn from_dates(start: Option<&str>, end: Option<&str>, offset: &FixedOffset) -> Self {
        let parse = |value: Option<&str>| {
            let value = value?;
            let date = parse_calendar_date(value);
            if date.is_none() {
                tracing::debug!(%value, "ignoring malformed date");
            }
            date
        };

        Self {
            start: parse(start).map(|date| start_of_day(date, offset)),
            end: parse(end).map(|date| end_of_day(date, offset)),
        }
    }

    #[cfg(test)]
    pub fn contains(&self, timestamp: i64) -> bool {
        self.start.map_or(true, |start| timestamp >= start)
            && self.end.map_or(true, |end| timestamp <= end)
    }
}

pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

fn local_to_timestamp(local: NaiveDateTime, offset: &FixedOffset) -> i64 {
    local.and_utc().timestamp() - offset.local_minus_utc() as i64
}

/// First second of `date` in `offset`.
pub fn start_of_day(date: NaiveDate, offset: &FixedOffset) -> i64 {
    local_to_timestamp(date.and_time(NaiveTime::MIN), offset)
}

/// Last second of `date` in `offset`.
pub fn end_of_day(date: NaiveDate, offset: &FixedOffset) -> i64 {
    start_of_day(date, offset) + SECONDS_PER_DAY - 1
}

pub fn calendar_date(timestamp: i64, offset: &FixedOffset) -> Option<NaiveDate> {
    DateTime::from_timestamp(timestamp, 0).map(|utc| utc.with_timezone(offset).date_naive())
}

/// Accepts RFC 3339, a local date-time, or a bare date (midnight local).
pub fn parse_timestamp(value: &str, offset: &FixedOffset) -> Option<i64> {
    let value = value.trim();

    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Some(date_time.timestamp());
    }

    for format in LOCAL_DATE_TIME_FORMATS {
        if let Ok(local) = NaiveDateTime::parse_from_str(value, format) {
            return Some(local_to_timestamp(local, offset));
        }
    }

    parse_calendar_date(value).map(|date| start_of_day(date, offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn shanghai() -> FixedOffset {
        FixedOffset::east_opt(8 * 3600).unwrap()
    }

    #[test]
    fn test_day_bounds_in_utc() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        assert_eq!(start_of_day(date, &utc()), 1_704_067_200);
        assert_eq!(end_of_day(date, &utc()), 1_704_067_200 + 86_399);
    }

    #[test]
    fn test_day_bounds_follow_offset() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        // midnight in UTC+8 is 16:00 the previous day in UTC
        assert_eq!(start_of_day(date, &shanghai()), 1_704_067_200 - 8 * 3600);
    }

    #[test]
    fn test_calendar_date_near_midnight() {
        // 2024-01-01T20:00:00Z
        let timestamp = 1_704_139_200;

        assert_eq!(
            calendar_date(timestamp, &utc()),
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );
        assert_eq!(
            calendar_date(timestamp, &shanghai()),
            NaiveDate::from_ymd_opt(2024, 1, 2)
        );
    }

    #[test]
    fn test_parse_calendar_date() {
        assert_eq!(
            parse_calendar_date("2024-02-29"),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert_eq!(parse_calendar_date("2023-02-29"), None);
        assert_eq!(parse_calendar_date("yesterday"), None);
        assert_eq!(parse_calendar_date(""), None);
    }

    #[test]
    fn test_parse_timestamp_formats() {
        assert_eq!(
            parse_timestamp("2024-01-01T08:00:00+08:00", &utc()),
            Some(1_704_067_200)
        );
        assert_eq!(
            parse_timestamp("2024-01-01T08:00", &shanghai()),
            Some(1_704_067_200)
        );
        assert_eq!(
            parse_timestamp("2024-01-01 00:00:30", &utc()),
            Some(1_704_067_230)
        );
        assert_eq!(parse_timestamp("2024-01-01", &utc()), Some(1_704_067_200));
        assert_eq!(parse_timestamp("01/01/2024", &utc()), None);
    }

    #[test]
    fn test_time_range_from_dates() {
        let range = TimeRange::from_dates(Some("2024-01-01"), Some("2024-01-31"), &utc());

        assert_eq!(range.start, Some(1_704_067_200));
        assert_eq!(range.end, Some(1_704_067_200 + 31 * 86_400 - 1));
    }

    #[test]
    fn test_time_range_ignores_malformed_dates() {
        let range = TimeRange::from_dates(Some("2024-13-01"), Some("soon"), &utc());

        assert_eq!(range, TimeRange::default());

        let range = TimeRange::from_dates(None, Some("2024-01-01"), &shanghai());

        assert_eq!(range.start, None);
        assert_eq!(range.end, Some(1_704_067_200 - 8 * 3600 + 86_399));
    }

    #[test]
    fn test_time_range_contains() {
        let range = TimeRange {
            start: Some(10),
            end: Some(20),
        };

        assert!(range.contains(10));
        assert!(range.contains(20));
        assert!(!range.contains(9));
        assert!(!range.contains(21));
        assert!(TimeRange::default().contains(i64::MIN));
    }
}
