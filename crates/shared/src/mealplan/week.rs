use serde::{Deserialize, Serialize};
use std::fmt;
use time::{Date, Duration, Weekday};

use super::DayKey;

/// ISO-8601 week, identified by its Monday.
///
/// Serialized as `{ "year": 2025, "week": 4 }`; ordering is chronological.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "WeekRepr", into = "WeekRepr")]
pub struct WeekKey {
    monday: Date,
}

#[derive(Serialize, Deserialize)]
struct WeekRepr {
    year: i32,
    week: u8,
}

impl TryFrom<WeekRepr> for WeekKey {
    type Error = String;

    fn try_from(value: WeekRepr) -> Result<Self, Self::Error> {
        WeekKey::new(value.year, value.week)
            .ok_or_else(|| format!("invalid iso week {}_W{}", value.year, value.week))
    }
}

impl From<WeekKey> for WeekRepr {
    fn from(value: WeekKey) -> Self {
        Self {
            year: value.year(),
            week: value.week(),
        }
    }
}

impl WeekKey {
    /// Returns `None` when the year has no such ISO week (e.g. week 53 of 2025).
    pub fn new(year: i32, week: u8) -> Option<Self> {
        Date::from_iso_week_date(year, week, Weekday::Monday)
            .ok()
            .map(|monday| Self { monday })
    }

    /// The week a given day belongs to.
    pub fn containing(date: Date) -> Self {
        let days_since_monday = date.weekday().number_days_from_monday() as i64;

        Self {
            monday: date - Duration::days(days_since_monday),
        }
    }

    pub fn year(&self) -> i32 {
        self.monday.to_iso_week_date().0
    }

    pub fn week(&self) -> u8 {
        self.monday.to_iso_week_date().1
    }

    pub fn start_date(&self) -> Date {
        self.monday
    }

    pub fn end_date(&self) -> Date {
        self.monday + Duration::days(6)
    }

    pub fn date_of(&self, day: DayKey) -> Date {
        self.monday + Duration::days(day.offset())
    }

    /// Moves `weeks` weeks forward (or backward when negative).
    pub fn navigate(&self, weeks: i64) -> Self {
        Self {
            monday: self.monday + Duration::weeks(weeks),
        }
    }

    pub fn plan_id(&self, household_id: &str) -> String {
        format!("{household_id}_{self}")
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_W{:02}", self.year(), self.week())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_week_from_iso_number() {
        let week = WeekKey::new(2025, 4).unwrap();
        assert_eq!(week.start_date(), date!(2025 - 01 - 20));
        assert_eq!(week.end_date(), date!(2025 - 01 - 26));
        assert_eq!(week.to_string(), "2025_W04");
    }

    #[test]
    fn test_week_containing_any_day() {
        let wednesday = date!(2025 - 01 - 22);
        let sunday = date!(2025 - 01 - 26);
        assert_eq!(WeekKey::containing(wednesday), WeekKey::new(2025, 4).unwrap());
        assert_eq!(WeekKey::containing(sunday), WeekKey::new(2025, 4).unwrap());
    }

    #[test]
    fn test_week_belongs_to_iso_year() {
        // 2024-12-30 is the Monday of 2025-W01
        let week = WeekKey::containing(date!(2024 - 12 - 31));
        assert_eq!(week.year(), 2025);
        assert_eq!(week.week(), 1);
        assert_eq!(week.start_date(), date!(2024 - 12 - 30));
    }

    #[test]
    fn test_navigate_across_years() {
        let week = WeekKey::new(2020, 53).unwrap();
        let next = week.navigate(1);
        assert_eq!((next.year(), next.week()), (2021, 1));
        assert_eq!(next.navigate(-1), week);
    }

    #[test]
    fn test_invalid_week_is_rejected() {
        assert!(WeekKey::new(2025, 53).is_none());
        assert!(WeekKey::new(2025, 0).is_none());
        assert!(serde_json::from_str::<WeekKey>(r#"{"year":2025,"week":53}"#).is_err());
    }

    #[test]
    fn test_plan_id_and_slot_dates() {
        let week = WeekKey::new(2025, 4).unwrap();
        assert_eq!(week.plan_id("house-1"), "house-1_2025_W04");
        assert_eq!(week.date_of(DayKey::Wednesday), date!(2025 - 01 - 22));
        assert_eq!(week.date_of(DayKey::Sunday), date!(2025 - 01 - 26));
    }

    #[test]
    fn test_serde_shape() {
        let week = WeekKey::new(2025, 4).unwrap();
        let json = serde_json::to_string(&week).unwrap();
        assert_eq!(json, r#"{"year":2025,"week":4}"#);
        assert_eq!(serde_json::from_str::<WeekKey>(&json).unwrap(), week);
    }
}
