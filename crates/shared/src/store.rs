//! Data-access contracts consumed by the planning and shopping commands.
//!
//! Persistence is owned by the caller; these traits only fetch and store
//! records by key. Writes replace whole fields, so concurrent writers resolve
//! as last-writer-wins.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::mealplan::{WeekKey, WeekPlan};
use crate::recipe::Recipe;
use crate::shopping::PermanentItem;

#[async_trait]
pub trait RecipeStore: Send + Sync {
    async fn get_recipe_by_id(&self, id: &str) -> anyhow::Result<Option<Recipe>>;
}

#[async_trait]
pub trait MealPlanStore: Send + Sync {
    async fn get_meal_plan_for_week(&self, week: WeekKey) -> anyhow::Result<Option<WeekPlan>>;

    async fn save_meal_plan(&self, plan: &WeekPlan) -> anyhow::Result<()>;
}

#[async_trait]
pub trait ShoppingStore: MealPlanStore {
    async fn set_checked_items(
        &self,
        plan_id: &str,
        checked: &BTreeMap<String, bool>,
    ) -> anyhow::Result<()>;

    async fn add_permanent_item(
        &self,
        plan_id: &str,
        item: &PermanentItem,
    ) -> anyhow::Result<()>;

    async fn delete_permanent_item(&self, plan_id: &str, id: &str) -> anyhow::Result<()>;
}

#[derive(Default)]
struct Records {
    recipes: HashMap<String, Recipe>,
    plans: HashMap<String, WeekPlan>,
}

/// Process-local store, handy for tests and previews.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    household_id: String,
    records: Arc<RwLock<Records>>,
}

impl InMemoryStore {
    pub fn new(household_id: impl Into<String>) -> Self {
        Self {
            household_id: household_id.into(),
            records: Arc::default(),
        }
    }

    pub async fn insert_recipe(&self, recipe: Recipe) {
        let mut records = self.records.write().await;
        records.recipes.insert(recipe.id.to_owned(), recipe);
    }

    pub async fn insert_plan(&self, plan: WeekPlan) {
        let mut records = self.records.write().await;
        records.plans.insert(plan.id.to_owned(), plan);
    }

    async fn update_plan(
        &self,
        plan_id: &str,
        f: impl FnOnce(&mut WeekPlan) + Send,
    ) -> anyhow::Result<()> {
        let mut records = self.records.write().await;
        let Some(plan) = records.plans.get_mut(plan_id) else {
            anyhow::bail!("meal plan {plan_id} not found");
        };

        f(plan);

        Ok(())
    }
}

#[async_trait]
impl RecipeStore for InMemoryStore {
    async fn get_recipe_by_id(&self, id: &str) -> anyhow::Result<Option<Recipe>> {
        Ok(self.records.read().await.recipes.get(id).cloned())
    }
}

#[async_trait]
impl MealPlanStore for InMemoryStore {
    async fn get_meal_plan_for_week(&self, week: WeekKey) -> anyhow::Result<Option<WeekPlan>> {
        let plan_id = week.plan_id(&self.household_id);

        Ok(self.records.read().await.plans.get(&plan_id).cloned())
    }

    async fn save_meal_plan(&self, plan: &WeekPlan) -> anyhow::Result<()> {
        self.insert_plan(plan.clone()).await;

        Ok(())
    }
}

#[async_trait]
impl ShoppingStore for InMemoryStore {
    async fn set_checked_items(
        &self,
        plan_id: &str,
        checked: &BTreeMap<String, bool>,
    ) -> anyhow::Result<()> {
        let checked = checked.clone();
        self.update_plan(plan_id, move |plan| plan.checked_items = checked)
            .await
    }

    async fn add_permanent_item(
        &self,
        plan_id: &str,
        item: &PermanentItem,
    ) -> anyhow::Result<()> {
        let item = item.clone();
        self.update_plan(plan_id, move |plan| plan.permanent_items.push(item))
            .await
    }

    async fn delete_permanent_item(&self, plan_id: &str, id: &str) -> anyhow::Result<()> {
        self.update_plan(plan_id, |plan| {
            plan.permanent_items.retain(|item| item.id != id)
        })
        .await
    }
}
