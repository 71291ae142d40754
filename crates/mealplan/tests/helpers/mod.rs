#![allow(dead_code)]

use mealplanner_shared::{mealplan::WeekKey, store::InMemoryStore};

pub const HOUSEHOLD: &str = "house-1";

pub fn setup_store() -> InMemoryStore {
    InMemoryStore::new(HOUSEHOLD)
}

pub fn week(week: u8) -> WeekKey {
    WeekKey::new(2025, week).expect("valid iso week")
}
