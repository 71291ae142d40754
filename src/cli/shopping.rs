use anyhow::Result;
use mealplanner_shared::shopping::NewPermanentItem;
use mealplanner_shopping::{Query, ToggleInput};

use super::Context;

#[tracing::instrument(skip(context))]
pub async fn list(context: &Context) -> Result<()> {
    let list = Query::new(context.store.clone())
        .list(context.week, context.today)
        .await?;

    print!("{}", mealplanner::render::shopping_list(&list));

    Ok(())
}

#[tracing::instrument(skip(context))]
pub async fn toggle(context: &Context, key: String) -> Result<()> {
    context.planning.load(context.week).await?;

    let checked = context
        .shopping
        .toggle(ToggleInput {
            week: context.week,
            key: key.to_owned(),
        })
        .await?;

    println!("{key}: {}", if checked { "checked" } else { "unchecked" });

    Ok(())
}

#[tracing::instrument(skip(context))]
pub async fn clear_checks(context: &Context) -> Result<()> {
    context.planning.load(context.week).await?;
    context.shopping.reset(context.week).await?;

    Ok(())
}

#[tracing::instrument(skip(context))]
pub async fn add_item(
    context: &Context,
    name: String,
    category: Option<String>,
    quantity: Option<f64>,
    unit: Option<String>,
) -> Result<()> {
    context.planning.load(context.week).await?;

    let item = context
        .shopping
        .add_permanent_item(
            context.week,
            NewPermanentItem {
                name,
                category,
                quantity,
                unit,
            },
        )
        .await?;

    println!("{}", item.id);

    Ok(())
}

#[tracing::instrument(skip(context))]
pub async fn delete_item(context: &Context, id: String) -> Result<()> {
    context
        .shopping
        .delete_permanent_item(context.week, &id)
        .await?;

    Ok(())
}
