use mealplanner_shared::{mealplan::WeekKey, store::ShoppingStore};

use crate::CheckState;

impl<S: ShoppingStore> super::Command<S> {
    /// Unchecks every entry of the week.
    pub async fn reset(&self, week: WeekKey) -> mealplanner_shared::Result<()> {
        let mut cache = self.cache.lock().await;
        let plan = self.load(week).await?;
        if plan.checked_items.is_empty() {
            return Ok(());
        }

        self.save_check_state(&plan, &CheckState::default()).await?;
        cache.remove(&week);

        tracing::info!(plan_id = %plan.id, "shopping checks cleared");

        Ok(())
    }
}
