#![allow(dead_code)]

use mealplanner::JsonFileStore;
use mealplanner_shared::{
    mealplan::WeekKey,
    recipe::{Recipe, RecipeIngredient},
};
use temp_dir::TempDir;

pub const HOUSEHOLD: &str = "house-1";

pub fn setup_store(dir: &TempDir) -> JsonFileStore {
    JsonFileStore::new(dir.child("data/mealplanner.json"), HOUSEHOLD)
}

pub fn week() -> WeekKey {
    WeekKey::new(2025, 4).expect("valid iso week")
}

pub fn pasta() -> Recipe {
    Recipe {
        id: "pasta-id".to_owned(),
        name: "Pasta".to_owned(),
        servings: Some(4),
        ingredients: vec![
            RecipeIngredient::new("Tomato", "produce", 800.0, "g"),
            RecipeIngredient::new("Olive oil", "pantry", 2.0, "cuillere-soupe"),
        ],
    }
}
