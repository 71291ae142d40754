use mealplanner_shared::{
    mealplan::{MealAssignment, SlotId, WeekKey},
    store::MealPlanStore,
};
use validator::Validate;

pub struct UpdateSlotInput {
    pub week: WeekKey,
    pub slot: SlotId,
    /// `None` clears the slot
    pub meal: Option<MealAssignment>,
}

pub struct UpdateSlotsInput {
    pub week: WeekKey,
    pub updates: Vec<(SlotId, Option<MealAssignment>)>,
}

/// Exchanges the contents of two slots; an empty side simply moves the meal.
pub struct SwapSlotsInput {
    pub week: WeekKey,
    pub from: SlotId,
    pub to: SlotId,
}

#[derive(Validate)]
pub struct PlaceMultiDayInput {
    pub week: WeekKey,
    /// Checked once duplicates are removed
    #[validate(length(min = 2, message = "A multi-day meal needs at least two slots"))]
    pub slots: Vec<SlotId>,
    pub meal: MealAssignment,
}

impl<S: MealPlanStore> super::Command<S> {
    pub async fn update_slot(&self, input: UpdateSlotInput) -> mealplanner_shared::Result<()> {
        self.update_slots(UpdateSlotsInput {
            week: input.week,
            updates: vec![(input.slot, input.meal)],
        })
        .await
    }

    /// Applies every update in order and saves the plan once.
    pub async fn update_slots(&self, input: UpdateSlotsInput) -> mealplanner_shared::Result<()> {
        let count = input.updates.len();
        self.mutate(input.week, |plan| {
            for (slot, meal) in input.updates {
                match meal {
                    Some(meal) => plan.meals.insert(slot, meal),
                    None => plan.meals.remove(&slot),
                };
            }

            Ok(())
        })
        .await?;

        tracing::info!(week = %input.week, count, "meal slots updated");

        Ok(())
    }

    /// Writes one meal spanning several slots, each slot carrying the full
    /// member list.
    pub async fn place_multi_day(
        &self,
        mut input: PlaceMultiDayInput,
    ) -> mealplanner_shared::Result<()> {
        input.slots.sort();
        input.slots.dedup();
        input.validate()?;

        let meal = input.meal.with_multi_day(input.slots.clone());
        let updates = input
            .slots
            .into_iter()
            .map(|slot| (slot, Some(meal.clone())))
            .collect();

        self.update_slots(UpdateSlotsInput {
            week: input.week,
            updates,
        })
        .await
    }

    pub async fn swap_slots(&self, input: SwapSlotsInput) -> mealplanner_shared::Result<()> {
        if input.from == input.to {
            return Ok(());
        }

        self.mutate(input.week, |plan| {
            let from = plan.meals.remove(&input.from);
            let to = plan.meals.remove(&input.to);

            if let Some(meal) = from {
                plan.meals.insert(input.to, meal);
            }
            if let Some(meal) = to {
                plan.meals.insert(input.from, meal);
            }

            Ok(())
        })
        .await?;

        tracing::info!(week = %input.week, from = %input.from, to = %input.to, "meal slots swapped");

        Ok(())
    }
}
