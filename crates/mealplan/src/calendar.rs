use mealplanner_shared::mealplan::{DayKey, WeekKey};
use serde::Serialize;
use strum::VariantArray;
use time::Date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekDay {
    pub day: DayKey,
    pub date: Date,
    /// Strictly before today, date-only
    pub is_past: bool,
}

/// The seven days of a week, monday first.
pub fn days(week: WeekKey, today: Date) -> Vec<WeekDay> {
    DayKey::VARIANTS
        .iter()
        .map(|day| {
            let date = week.date_of(*day);

            WeekDay {
                day: *day,
                date,
                is_past: date < today,
            }
        })
        .collect()
}
