#![allow(dead_code)]

use mealplanner_shared::{
    mealplan::{MealAssignment, SlotId, WeekKey, WeekPlan},
    recipe::{Recipe, RecipeIngredient},
    store::InMemoryStore,
};
use time::macros::datetime;

pub const HOUSEHOLD: &str = "house-1";

pub fn week() -> WeekKey {
    WeekKey::new(2025, 4).expect("valid iso week")
}

pub fn pasta() -> Recipe {
    Recipe {
        id: "pasta-id".to_owned(),
        name: "Pasta".to_owned(),
        servings: Some(4),
        ingredients: vec![RecipeIngredient::new("Tomato", "produce", 800.0, "g")],
    }
}

pub fn recipe(id: &str, name: &str, ingredients: Vec<RecipeIngredient>) -> Recipe {
    Recipe {
        id: id.to_owned(),
        name: name.to_owned(),
        servings: Some(1),
        ingredients,
    }
}

/// Store holding an empty plan for [`week`] and the given recipes.
pub async fn setup_store(recipes: Vec<Recipe>) -> InMemoryStore {
    let store = InMemoryStore::new(HOUSEHOLD);
    for recipe in recipes {
        store.insert_recipe(recipe).await;
    }

    store
        .insert_plan(WeekPlan::empty(
            HOUSEHOLD,
            week(),
            datetime!(2025-01-20 08:00:00 UTC),
        ))
        .await;

    store
}

pub async fn plan_meals(store: &InMemoryStore, meals: Vec<(SlotId, MealAssignment)>) {
    let mealplan = mealplanner_mealplan::Command::new(store.clone(), HOUSEHOLD);
    mealplan
        .update_slots(mealplanner_mealplan::UpdateSlotsInput {
            week: week(),
            updates: meals
                .into_iter()
                .map(|(slot, meal)| (slot, Some(meal)))
                .collect(),
        })
        .await
        .expect("meals planned");
}
