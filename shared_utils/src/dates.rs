//! Calendar-day helpers used wherever CSV files are joined by date.
//!
//! Files in the pipeline disagree on how they spell a day: the fetcher writes
//! `2024-01-31`, the normalizer writes `1/31/2024`, raw tweets carry
//! `Wed Jan 31 13:05:00 +0000 2024`. [`parse_date`] accepts all of them so the
//! merge and movement steps can key on [`NaiveDate`] regardless of origin.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

/// Timestamp layout used by Twitter's classic API (`created_at`).
pub const TWITTER_TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parses a calendar day from any of the date spellings found in pipeline files.
///
/// Accepted: `YYYY-MM-DD`, `M/D/YYYY` (with or without zero padding),
/// RFC 3339, the Twitter `created_at` layout and naive `YYYY-MM-DD HH:MM:SS`.
/// Offset-carrying timestamps resolve to the day in their own offset.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            DateTime::parse_from_str(raw, TWITTER_TIMESTAMP_FORMAT)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .or_else(|| {
            NAIVE_DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// Renders `month/day/year` without zero padding, e.g. `9/7/2024`.
pub fn format_month_day_year(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Truncates a Unix timestamp in milliseconds to its UTC calendar day.
pub fn day_from_millis(millis: i64) -> Option<NaiveDate> {
    DateTime::<Utc>::from_timestamp_millis(millis).map(|dt| dt.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_every_pipeline_spelling() {
        let want = ymd(2024, 9, 7);
        for raw in [
            "2024-09-07",
            "9/7/2024",
            "09/07/2024",
            "2024-09-07T23:10:00Z",
            "Sat Sep 07 23:10:00 +0000 2024",
            "2024-09-07 23:10:00",
        ] {
            assert_eq!(parse_date(raw), Some(want), "{raw}");
        }
    }

    #[test]
    fn offset_timestamps_keep_their_local_day() {
        assert_eq!(parse_date("Sun Sep 08 00:30:00 +0200 2024"), Some(ymd(2024, 9, 8)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date("13/45/2024"), None);
    }

    #[test]
    fn month_day_year_is_unpadded_and_round_trips() {
        let day = ymd(2024, 1, 5);
        let rendered = format_month_day_year(day);
        assert_eq!(rendered, "1/5/2024");
        assert_eq!(parse_date(&rendered), Some(day));
    }

    #[test]
    fn millis_truncate_to_utc_day() {
        // 2024-01-01T23:59:59.999Z
        assert_eq!(day_from_millis(1_704_153_599_999), Some(ymd(2024, 1, 1)));
        assert_eq!(day_from_millis(1_704_153_600_000), Some(ymd(2024, 1, 2)));
    }
}
