use time::{Date, OffsetDateTime};
use time_tz::{ToTimezone, timezones};

/// Current calendar date of the household.
///
/// Unknown timezone names fall back to UTC.
pub fn today(tz: impl Into<String>) -> Date {
    today_at(OffsetDateTime::now_utc(), tz)
}

pub fn today_at(now: OffsetDateTime, tz: impl Into<String>) -> Date {
    let tz = tz.into();
    let mut now = now;

    if let Some(tz) = timezones::get_by_name(&tz) {
        now = now.to_timezone(tz);
    } else {
        tracing::debug!(tz = %tz, "unknown timezone, using UTC");
    }

    now.date()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    #[test]
    fn test_today_follows_timezone() {
        let now = datetime!(2025-01-22 23:30:00 UTC);
        assert_eq!(today_at(now, "UTC"), date!(2025 - 01 - 22));
        assert_eq!(today_at(now, "Europe/Paris"), date!(2025 - 01 - 23));
        assert_eq!(today_at(now, "America/New_York"), date!(2025 - 01 - 22));
    }

    #[test]
    fn test_unknown_timezone_falls_back_to_utc() {
        let now = datetime!(2025-01-22 23:30:00 UTC);
        assert_eq!(today_at(now, "Mars/Olympus"), date!(2025 - 01 - 22));
    }
}
