mod command;
pub mod mealplan;
pub mod recipe;
pub mod shopping;
pub mod store;

pub use command::*;

/// Category assigned to ingredients and items that were saved without one.
pub const DEFAULT_CATEGORY: &str = "Other";
