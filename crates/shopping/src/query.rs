use mealplanner_mealplan::Horizon;
use mealplanner_shared::{
    mealplan::WeekKey,
    recipe::Recipe,
    store::{MealPlanStore, RecipeStore},
};
use std::collections::HashMap;
use time::Date;

use crate::{BuildInput, CheckState, ShoppingList, ShoppingListService};

#[derive(Clone)]
pub struct Query<S> {
    store: S,
}

impl<S: MealPlanStore + RecipeStore> Query<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Shopping list of the meals of `week` from `today` on.
    ///
    /// A week without plan gives an empty list.
    pub async fn list(&self, week: WeekKey, today: Date) -> mealplanner_shared::Result<ShoppingList> {
        let Some(plan) = self.store.get_meal_plan_for_week(week).await? else {
            return Ok(ShoppingList::default());
        };

        let demand = Horizon::from_plan(&plan, today).demand();

        let mut recipes: HashMap<String, Recipe> = HashMap::new();
        for item in &demand {
            if recipes.contains_key(&item.recipe_id) {
                continue;
            }

            if let Some(recipe) = self.store.get_recipe_by_id(&item.recipe_id).await? {
                recipes.insert(item.recipe_id.to_owned(), recipe);
            }
        }

        let check_state = CheckState::from(plan.checked_items.clone());

        Ok(ShoppingListService::build(BuildInput {
            demand: &demand,
            recipes: &recipes,
            permanent_items: &plan.permanent_items,
            check_state: &check_state,
        }))
    }
}
