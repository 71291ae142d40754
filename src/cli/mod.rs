pub mod plan;
pub mod shopping;

use anyhow::Result;
use clap::Args;
use mealplanner::{JsonFileStore, config::Config};
use mealplanner_mealplan::WeekCache;
use mealplanner_shared::mealplan::{MealAssignment, WeekKey};
use std::sync::Arc;
use time::Date;
use tokio::sync::Mutex;

pub struct Context {
    pub store: JsonFileStore,
    pub week: WeekKey,
    pub today: Date,
    pub planning: mealplanner_mealplan::Command<JsonFileStore>,
    pub shopping: mealplanner_shopping::Command<JsonFileStore>,
}

impl Context {
    pub fn new(config: Config, year: Option<i32>, week: Option<u8>) -> Result<Self> {
        let today = mealplanner_mealplan::today(&config.planning.timezone);
        let week = mealplanner::resolve_week(year, week, today)?;
        let store = JsonFileStore::new(&config.store.path, &config.household.id);
        let cache = Arc::new(Mutex::new(WeekCache::new(config.planning.cache_capacity)));
        let planning = mealplanner_mealplan::Command::with_cache(
            store.clone(),
            &config.household.id,
            cache.clone(),
        );
        let shopping = mealplanner_shopping::Command::with_cache(store.clone(), cache);

        Ok(Self {
            store,
            week,
            today,
            planning,
            shopping,
        })
    }
}

#[derive(Args, Debug)]
pub struct MealArgs {
    /// Recipe id
    #[arg(long, conflicts_with = "custom", required_unless_present = "custom")]
    pub recipe: Option<String>,

    /// Free-text meal without recipe
    #[arg(long)]
    pub custom: Option<String>,

    #[arg(long, default_value_t = 2)]
    pub servings: u32,
}

impl MealArgs {
    pub async fn into_meal(self, context: &Context) -> mealplanner_shared::Result<MealAssignment> {
        use mealplanner_shared::store::RecipeStore;

        if let Some(name) = self.custom {
            return Ok(MealAssignment::custom(name, self.servings));
        }

        let Some(recipe_id) = self.recipe else {
            mealplanner_shared::user!("either --recipe or --custom is required");
        };

        let Some(recipe) = context.store.get_recipe_by_id(&recipe_id).await? else {
            mealplanner_shared::not_found!("recipe {}", recipe_id);
        };

        Ok(MealAssignment::recipe(recipe.id, recipe.name, self.servings))
    }
}
