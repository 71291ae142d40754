mod permanent;
mod reset;
mod toggle;

pub use toggle::*;

use mealplanner_mealplan::WeekCache;
use mealplanner_shared::{
    mealplan::{WeekKey, WeekPlan},
    store::ShoppingStore,
};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::CheckState;

/// Shopping actions on an existing week plan.
///
/// Each action reads the plan from the store, so it always starts from the
/// latest check state. Writes hold the [`WeekCache`] shared with the planning
/// commands and evict the week from it once saved.
#[derive(Clone)]
pub struct Command<S: ShoppingStore> {
    store: S,
    cache: Arc<Mutex<WeekCache>>,
}

impl<S: ShoppingStore> Command<S> {
    pub fn new(store: S) -> Self {
        Self::with_cache(store, Arc::default())
    }

    pub fn with_cache(store: S, cache: Arc<Mutex<WeekCache>>) -> Self {
        Self { store, cache }
    }

    pub async fn load(&self, week: WeekKey) -> mealplanner_shared::Result<WeekPlan> {
        let Some(plan) = self.store.get_meal_plan_for_week(week).await? else {
            mealplanner_shared::not_found!("meal plan {}", week);
        };

        Ok(plan)
    }

    async fn save_check_state(
        &self,
        plan: &WeekPlan,
        state: &CheckState,
    ) -> mealplanner_shared::Result<()> {
        self.store.set_checked_items(&plan.id, state.as_map()).await?;

        Ok(())
    }
}
