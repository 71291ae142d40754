pub mod config;
pub mod observability;
pub mod render;
pub mod store;

pub use config::Config;
pub use store::JsonFileStore;

use mealplanner_shared::mealplan::WeekKey;
use time::Date;

/// Week targeted by a command: the given ISO week, or the one holding `today`.
pub fn resolve_week(year: Option<i32>, week: Option<u8>, today: Date) -> anyhow::Result<WeekKey> {
    let current = WeekKey::containing(today);

    match (year, week) {
        (None, None) => Ok(current),
        (year, Some(week)) => {
            let year = year.unwrap_or(current.year());
            WeekKey::new(year, week).ok_or_else(|| anyhow::anyhow!("{year} has no week {week}"))
        }
        (Some(_), None) => anyhow::bail!("--year needs --week"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_resolve_week() {
        let today = date!(2025 - 01 - 22);

        assert_eq!(resolve_week(None, None, today).unwrap(), WeekKey::new(2025, 4).unwrap());
        assert_eq!(resolve_week(None, Some(10), today).unwrap(), WeekKey::new(2025, 10).unwrap());
        assert_eq!(
            resolve_week(Some(2020), Some(53), today).unwrap(),
            WeekKey::new(2020, 53).unwrap()
        );
        assert!(resolve_week(None, Some(53), today).is_err());
        assert!(resolve_week(Some(2025), None, today).is_err());
    }
}
