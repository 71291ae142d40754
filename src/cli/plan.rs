use anyhow::{Context as _, Result};
use mealplanner_mealplan::{PlaceMultiDayInput, SwapSlotsInput, UpdateSlotInput};
use mealplanner_shared::{mealplan::SlotId, recipe::Recipe};

use super::{Context, MealArgs};

#[tracing::instrument(skip(context))]
pub async fn show(context: &Context) -> Result<()> {
    let plan = context.planning.load(context.week).await?;
    let days = mealplanner_mealplan::days(context.week, context.today);

    print!("{}", mealplanner::render::week_plan(&plan, &days));

    Ok(())
}

#[tracing::instrument(skip(context))]
pub async fn assign(context: &Context, slots: Vec<SlotId>, meal: MealArgs) -> Result<()> {
    let meal = meal.into_meal(context).await?;

    if let [slot] = slots[..] {
        context
            .planning
            .update_slot(UpdateSlotInput {
                week: context.week,
                slot,
                meal: Some(meal),
            })
            .await?;

        return Ok(());
    }

    context
        .planning
        .place_multi_day(PlaceMultiDayInput {
            week: context.week,
            slots,
            meal,
        })
        .await?;

    Ok(())
}

#[tracing::instrument(skip(context))]
pub async fn unassign(context: &Context, slot: SlotId) -> Result<()> {
    context
        .planning
        .update_slot(UpdateSlotInput {
            week: context.week,
            slot,
            meal: None,
        })
        .await?;

    Ok(())
}

#[tracing::instrument(skip(context))]
pub async fn swap(context: &Context, from: SlotId, to: SlotId) -> Result<()> {
    context
        .planning
        .swap_slots(SwapSlotsInput {
            week: context.week,
            from,
            to,
        })
        .await?;

    Ok(())
}

#[tracing::instrument(skip(context))]
pub async fn add_extra(context: &Context, meal: MealArgs) -> Result<()> {
    let meal = meal.into_meal(context).await?;
    let id = context.planning.add_extra(context.week, meal).await?;

    println!("{id}");

    Ok(())
}

#[tracing::instrument(skip(context))]
pub async fn delete_extra(context: &Context, id: String) -> Result<()> {
    context.planning.delete_extra(context.week, &id).await?;

    Ok(())
}

#[tracing::instrument(skip(context))]
pub async fn import_recipes(context: &Context, path: String) -> Result<()> {
    let bytes = tokio::fs::read(&path)
        .await
        .with_context(|| format!("reading {path}"))?;
    let recipes: Vec<Recipe> =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {path}"))?;

    let count = context.store.import_recipes(recipes).await?;
    println!("{count} recipes imported");

    Ok(())
}
