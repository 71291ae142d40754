use mealplanner_shared::{mealplan::WeekKey, store::ShoppingStore};

use crate::CheckState;

pub struct ToggleInput {
    pub week: WeekKey,
    pub key: String,
}

impl<S: ShoppingStore> super::Command<S> {
    /// Returns the new state of the entry.
    pub async fn toggle(&self, input: ToggleInput) -> mealplanner_shared::Result<bool> {
        let mut cache = self.cache.lock().await;
        let plan = self.load(input.week).await?;
        let mut state = CheckState::from(plan.checked_items.clone());
        let checked = state.toggle(input.key.to_owned());

        self.save_check_state(&plan, &state).await?;
        cache.remove(&input.week);

        tracing::info!(plan_id = %plan.id, key = %input.key, checked, "shopping entry toggled");

        Ok(checked)
    }
}
