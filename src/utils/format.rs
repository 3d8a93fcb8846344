use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Longest text shown before `trim` cuts it off
pub const TRIM_LIMIT: usize = 20;

/// "Tue, 5 Mar 2024 09:05"
const DATE_FORMAT: &str = "%a, %-d %b %Y %H:%M";

/// Shorten a display value to its first 20 characters plus "..."
///
/// Missing or empty input renders as an empty string.
pub fn trim(value: Option<&str>) -> String {
    let value = match value {
        Some(v) if !v.is_empty() => v,
        _ => return String::new(),
    };

    match value.char_indices().nth(TRIM_LIMIT) {
        Some((cut, _)) => format!("{}...", &value[..cut]),
        None => value.to_string(),
    }
}

/// Format a timestamp as "Tue, 5 Mar 2024 09:05" in the viewer's local time
pub fn format_date(value: Option<&str>) -> String {
    format_date_in(value, &Local)
}

/// Same as [`format_date`], rendered in an explicit time zone
pub fn format_date_in<Tz: TimeZone>(value: Option<&str>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let value = match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => return String::new(),
    };

    match parse_timestamp(value, tz) {
        Some(dt) => dt.format(DATE_FORMAT).to_string(),
        None => {
            log::debug!("Unparseable timestamp: {}", value);
            String::new()
        }
    }
}

fn parse_timestamp<Tz: TimeZone>(value: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value).or_else(|_| DateTime::parse_from_rfc2822(value)) {
        return Some(dt.with_timezone(tz));
    }

    // No offset given: the wall-clock time is already local
    const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"];
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return resolve_local(tz, &naive);
        }
    }

    // Bare dates are midnight UTC
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight).with_timezone(tz))
}

/// Wall-clock time in `tz`; times skipped by a DST jump move forward by the gap
fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: &NaiveDateTime) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(naive)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(*naive + Duration::hours(1))).earliest())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, LocalResult};

    /// UTC+1, jumping to UTC+2 at 2024-03-31 01:00 UTC (02:00 local becomes 03:00)
    #[derive(Debug, Clone, Copy)]
    struct SpringForward;

    impl SpringForward {
        fn switch() -> NaiveDateTime {
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap().and_hms_opt(1, 0, 0).unwrap()
        }

        fn winter() -> FixedOffset {
            FixedOffset::east_opt(3600).unwrap()
        }

        fn summer() -> FixedOffset {
            FixedOffset::east_opt(2 * 3600).unwrap()
        }
    }

    impl TimeZone for SpringForward {
        type Offset = FixedOffset;

        fn from_offset(_offset: &FixedOffset) -> Self {
            SpringForward
        }

        fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
            self.offset_from_local_datetime(&local.and_hms_opt(0, 0, 0).unwrap())
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
            let winter_ok = *local - Duration::hours(1) < Self::switch();
            let summer_ok = *local - Duration::hours(2) >= Self::switch();
            match (winter_ok, summer_ok) {
                (true, true) => LocalResult::Ambiguous(Self::winter(), Self::summer()),
                (true, false) => LocalResult::Single(Self::winter()),
                (false, true) => LocalResult::Single(Self::summer()),
                (false, false) => LocalResult::None,
            }
        }

        fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
            self.offset_from_utc_datetime(&utc.and_hms_opt(0, 0, 0).unwrap())
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            if *utc < Self::switch() {
                Self::winter()
            } else {
                Self::summer()
            }
        }
    }

    #[test]
    fn test_trim_long_value() {
        assert_eq!(trim(Some("a23456789012345678901234")), "a2345678901234567890...");
    }

    #[test]
    fn test_trim_short_and_missing() {
        assert_eq!(trim(Some("short")), "short");
        assert_eq!(trim(Some("exactly20characters!")), "exactly20characters!");
        assert_eq!(trim(Some("")), "");
        assert_eq!(trim(None), "");
    }

    #[test]
    fn test_trim_counts_characters_not_bytes() {
        let value = "é".repeat(25);
        assert_eq!(trim(Some(value.as_str())), format!("{}...", "é".repeat(20)));
    }

    #[test]
    fn test_format_naive_date_as_local() {
        assert_eq!(format_date(Some("2024-03-05T09:05:00")), "Tue, 5 Mar 2024 09:05");
        assert_eq!(format_date(Some("2024-03-05T09:05")), "Tue, 5 Mar 2024 09:05");
    }

    #[test]
    fn test_format_rfc3339_converts_zone() {
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(
            format_date_in(Some("2024-01-01T23:30:00Z"), &plus_two),
            "Tue, 2 Jan 2024 01:30"
        );
        assert_eq!(format_date_in(Some("2024-01-01T00:00:00Z"), &Utc), "Mon, 1 Jan 2024 00:00");
    }

    #[test]
    fn test_format_bare_date_is_utc_midnight() {
        let minus_five = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(format_date_in(Some("2024-03-05"), &minus_five), "Mon, 4 Mar 2024 19:00");
    }

    #[test]
    fn test_format_missing_or_garbage() {
        assert_eq!(format_date(None), "");
        assert_eq!(format_date(Some("")), "");
        assert_eq!(format_date(Some("not a date")), "");
    }

    #[test]
    fn test_format_rfc2822() {
        assert_eq!(
            format_date_in(Some("Tue, 05 Mar 2024 09:05:00 GMT"), &Utc),
            "Tue, 5 Mar 2024 09:05"
        );
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(
            format_date_in(Some("Tue, 05 Mar 2024 09:05:00 +0000"), &plus_two),
            "Tue, 5 Mar 2024 11:05"
        );
    }

    #[test]
    fn test_format_time_skipped_by_dst() {
        assert_eq!(
            format_date_in(Some("2024-03-31T02:30:00"), &SpringForward),
            "Sun, 31 Mar 2024 03:30"
        );
        // Either side of the jump is untouched
        assert_eq!(
            format_date_in(Some("2024-03-31T01:59:00"), &SpringForward),
            "Sun, 31 Mar 2024 01:59"
        );
        assert_eq!(
            format_date_in(Some("2024-03-31T03:00:00"), &SpringForward),
            "Sun, 31 Mar 2024 03:00"
        );
    }
}
