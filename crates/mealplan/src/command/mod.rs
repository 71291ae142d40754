mod extra;
mod slot;

pub use slot::*;

use mealplanner_shared::{
    mealplan::{WeekKey, WeekPlan},
    store::MealPlanStore,
};
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::Mutex;

use crate::WeekCache;

/// Planning actions on the week plans of one household.
///
/// Reads go through the shared [`WeekCache`]. Mutations always start from the
/// stored plan so writes made elsewhere are never overwritten by a stale
/// cached copy; the shopping commands evict the week after their own writes.
#[derive(Clone)]
pub struct Command<S: MealPlanStore> {
    store: S,
    household_id: String,
    cache: Arc<Mutex<WeekCache>>,
}

impl<S: MealPlanStore> Command<S> {
    pub fn new(store: S, household_id: impl Into<String>) -> Self {
        Self::with_cache(store, household_id, Arc::default())
    }

    pub fn with_cache(
        store: S,
        household_id: impl Into<String>,
        cache: Arc<Mutex<WeekCache>>,
    ) -> Self {
        Self {
            store,
            household_id: household_id.into(),
            cache,
        }
    }

    pub fn cache(&self) -> Arc<Mutex<WeekCache>> {
        self.cache.clone()
    }

    /// Plan of the week, created empty and saved the first time it is opened.
    pub async fn load(&self, week: WeekKey) -> mealplanner_shared::Result<WeekPlan> {
        let mut cache = self.cache.lock().await;
        if let Some(plan) = cache.get(&week) {
            return Ok(plan.clone());
        }

        let plan = self.fetch(week).await?;
        cache.insert(plan.clone());

        Ok(plan)
    }

    async fn fetch(&self, week: WeekKey) -> mealplanner_shared::Result<WeekPlan> {
        if let Some(plan) = self.store.get_meal_plan_for_week(week).await? {
            return Ok(plan);
        }

        let plan = WeekPlan::empty(&self.household_id, week, OffsetDateTime::now_utc());
        self.store.save_meal_plan(&plan).await?;

        tracing::info!(plan_id = %plan.id, "week plan created");

        Ok(plan)
    }

    async fn mutate<T>(
        &self,
        week: WeekKey,
        f: impl FnOnce(&mut WeekPlan) -> mealplanner_shared::Result<T>,
    ) -> mealplanner_shared::Result<T> {
        let mut cache = self.cache.lock().await;
        let mut plan = self.fetch(week).await?;
        let output = f(&mut plan)?;

        plan.updated_at = OffsetDateTime::now_utc();
        self.store.save_meal_plan(&plan).await?;
        cache.insert(plan);

        Ok(output)
    }
}
