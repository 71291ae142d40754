//! File-backed store: one JSON document holding recipes and week plans.

use anyhow::Context;
use async_trait::async_trait;
use mealplanner_shared::{
    mealplan::{WeekKey, WeekPlan},
    recipe::Recipe,
    shopping::PermanentItem,
    store::{MealPlanStore, RecipeStore, ShoppingStore},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Serialize, Deserialize, Default, Debug)]
pub struct Document {
    #[serde(default)]
    pub recipes: BTreeMap<String, Recipe>,
    #[serde(default)]
    pub plans: BTreeMap<String, WeekPlan>,
}

/// Every write rewrites the whole document through a temporary file, so a
/// crash never leaves a half-written store behind.
#[derive(Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    household_id: String,
    lock: Arc<Mutex<()>>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>, household_id: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            household_id: household_id.into(),
            lock: Arc::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Adds or replaces recipes, returns how many were written.
    pub async fn import_recipes(&self, recipes: Vec<Recipe>) -> anyhow::Result<usize> {
        let count = recipes.len();
        self.update(move |document| {
            for recipe in recipes {
                document.recipes.insert(recipe.id.to_owned(), recipe);
            }
            Ok(())
        })
        .await?;

        tracing::info!(count, path = %self.path.display(), "recipes imported");

        Ok(count)
    }

    async fn read(&self) -> anyhow::Result<Document> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Document::default()),
            Err(err) => {
                return Err(err).with_context(|| format!("reading {}", self.path.display()));
            }
        };

        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", self.path.display()))
    }

    async fn write(&self, document: &Document) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let bytes = serde_json::to_vec_pretty(document)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, bytes)
            .await
            .with_context(|| format!("writing {}", tmp.display()))?;
        tokio::fs::rename(&tmp, &self.path).await?;

        Ok(())
    }

    async fn update(
        &self,
        f: impl FnOnce(&mut Document) -> anyhow::Result<()> + Send,
    ) -> anyhow::Result<()> {
        let _guard = self.lock.lock().await;
        let mut document = self.read().await?;
        f(&mut document)?;
        self.write(&document).await
    }

    async fn update_plan(
        &self,
        plan_id: &str,
        f: impl FnOnce(&mut WeekPlan) + Send,
    ) -> anyhow::Result<()> {
        self.update(|document| {
            let Some(plan) = document.plans.get_mut(plan_id) else {
                anyhow::bail!("meal plan {plan_id} not found");
            };

            f(plan);
            plan.updated_at = time::OffsetDateTime::now_utc();

            Ok(())
        })
        .await
    }
}

#[async_trait]
impl RecipeStore for JsonFileStore {
    async fn get_recipe_by_id(&self, id: &str) -> anyhow::Result<Option<Recipe>> {
        let _guard = self.lock.lock().await;

        Ok(self.read().await?.recipes.remove(id))
    }
}

#[async_trait]
impl MealPlanStore for JsonFileStore {
    async fn get_meal_plan_for_week(&self, week: WeekKey) -> anyhow::Result<Option<WeekPlan>> {
        let _guard = self.lock.lock().await;
        let plan_id = week.plan_id(&self.household_id);

        Ok(self.read().await?.plans.remove(&plan_id))
    }

    async fn save_meal_plan(&self, plan: &WeekPlan) -> anyhow::Result<()> {
        let plan = plan.clone();
        self.update(move |document| {
            document.plans.insert(plan.id.to_owned(), plan);
            Ok(())
        })
        .await
    }
}

#[async_trait]
impl ShoppingStore for JsonFileStore {
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
