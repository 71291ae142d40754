use mealplanner_shared::{
    mealplan::{ExtraMeal, MealAssignment, WeekKey},
    store::MealPlanStore,
};

impl<S: MealPlanStore> super::Command<S> {
    /// Adds a meal outside the calendar and returns its id.
    pub async fn add_extra(
        &self,
        week: WeekKey,
        meal: MealAssignment,
    ) -> mealplanner_shared::Result<String> {
        let id = format!("extra_{}", ulid::Ulid::new());
        let extra = ExtraMeal {
            id: id.to_owned(),
            meal,
        };

        self.mutate(week, |plan| {
            plan.extras.push(extra);
            Ok(())
        })
        .await?;

        tracing::info!(week = %week, id = %id, "extra meal added");

        Ok(id)
    }

    pub async fn delete_extra(&self, week: WeekKey, id: &str) -> mealplanner_shared::Result<()> {
        self.mutate(week, |plan| {
            let Some(pos) = plan.extras.iter().position(|extra| extra.id == id) else {
                mealplanner_shared::not_found!("extra {}", id);
            };

            plan.extras.remove(pos);
            Ok(())
        })
        .await?;

        tracing::info!(week = %week, id = %id, "extra meal deleted");

        Ok(())
    }
}
