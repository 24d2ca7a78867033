use chrono::{DateTime, FixedOffset, Utc};

/// Dates on the site are shown in Japan time.
const JST_OFFSET_SECS: i32 = 9 * 3600;
const DATE_FORMAT: &str = "%Y/%m/%d";

/// `YYYY/MM/DD` in JST, or `不明` when the timestamp is missing.
pub fn format_date(dt: Option<DateTime<Utc>>) -> String {
    match dt {
        Some(dt) => match FixedOffset::east_opt(JST_OFFSET_SECS) {
            Some(jst) => dt.with_timezone(&jst).format(DATE_FORMAT).to_string(),
            None => dt.format(DATE_FORMAT).to_string(),
        },
        None => "不明".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_in_japan_time() {
        let late_utc = Utc.with_ymd_and_hms(2025, 3, 14, 20, 0, 0).unwrap();
        assert_eq!(format_date(Some(late_utc)), "2025/03/15");
    }

    #[test]
    fn missing_date_is_unknown() {
        assert_eq!(format_date(None), "不明");
    }
}
