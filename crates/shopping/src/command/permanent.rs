use mealplanner_shared::{
    mealplan::WeekKey,
    shopping::{NewPermanentItem, PermanentItem},
    store::ShoppingStore,
};
use time::OffsetDateTime;
use validator::Validate;

use crate::CheckState;

impl<S: ShoppingStore> super::Command<S> {
    pub async fn add_permanent_item(
        &self,
        week: WeekKey,
        input: NewPermanentItem,
    ) -> mealplanner_shared::Result<PermanentItem> {
        input.validate()?;

        let mut cache = self.cache.lock().await;
        let plan = self.load(week).await?;
        let item = PermanentItem::create(input, OffsetDateTime::now_utc());
        self.store.add_permanent_item(&plan.id, &item).await?;
        cache.remove(&week);

        tracing::info!(plan_id = %plan.id, id = %item.id, "permanent item added");

        Ok(item)
    }

    /// Deletes the item together with its check state.
    pub async fn delete_permanent_item(
        &self,
        week: WeekKey,
        id: &str,
    ) -> mealplanner_shared::Result<()> {
        let mut cache = self.cache.lock().await;
        let plan = self.load(week).await?;
        if !plan.permanent_items.iter().any(|item| item.id == id) {
            mealplanner_shared::not_found!("permanent item {}", id);
        }

        self.store.delete_permanent_item(&plan.id, id).await?;

        let mut state = CheckState::from(plan.checked_items.clone());
        if state.remove(id) {
            self.save_check_state(&plan, &state).await?;
        }
        cache.remove(&week);

        tracing::info!(plan_id = %plan.id, id = %id, "permanent item deleted");

        Ok(())
    }
}
