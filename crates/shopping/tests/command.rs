use mealplanner_shared::{
    Error,
    shopping::NewPermanentItem,
    store::MealPlanStore,
};
use mealplanner_mealplan::WeekCache;
use mealplanner_shopping::{Command, ToggleInput};
use std::sync::Arc;
use tokio::sync::Mutex;

mod helpers;

#[tokio::test]
async fn test_toggle_twice_restores_state() -> anyhow::Result<()> {
    let store = helpers::setup_store(vec![]).await;
    let command = Command::new(store.clone());
    let input = || ToggleInput {
        week: helpers::week(),
        key: "produce_Tomato".to_owned(),
    };

    assert!(command.toggle(input()).await?);
    assert!(!command.toggle(input()).await?);

    let plan = store.get_meal_plan_for_week(helpers::week()).await?.unwrap();
    assert!(plan.checked_items.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_reset_clears_every_check() -> anyhow::Result<()> {
    let store = helpers::setup_store(vec![]).await;
    let command = Command::new(store.clone());

    for key in ["produce_Tomato", "pantry_Rice"] {
        command
            .toggle(ToggleInput {
                week: helpers::week(),
                key: key.to_owned(),
            })
            .await?;
    }

    command.reset(helpers::week()).await?;

    let plan = store.get_meal_plan_for_week(helpers::week()).await?.unwrap();
    assert!(plan.checked_items.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_add_permanent_item_validates_name() -> anyhow::Result<()> {
    let store = helpers::setup_store(vec![]).await;
    let command = Command::new(store);

    let result = command
        .add_permanent_item(
            helpers::week(),
            NewPermanentItem {
                name: "   ".to_owned(),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(Error::Validate(_))));

    let result = command
        .add_permanent_item(
            helpers::week(),
            NewPermanentItem {
                name: "Flour".to_owned(),
                quantity: Some(f64::INFINITY),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(Error::Validate(_))));
    assert!(command.load(helpers::week()).await?.permanent_items.is_empty());

    let item = command
        .add_permanent_item(
            helpers::week(),
            NewPermanentItem {
                name: "Coffee".to_owned(),
                quantity: Some(2.0),
                unit: Some("piece".to_owned()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(item.category, "Other");
    assert!(item.id.starts_with("permanent_"));

    Ok(())
}

#[tokio::test]
async fn test_delete_permanent_item_clears_its_check() -> anyhow::Result<()> {
    let store = helpers::setup_store(vec![]).await;
    let command = Command::new(store.clone());

    let item = command
        .add_permanent_item(
            helpers::week(),
            NewPermanentItem {
                name: "Paper towels".to_owned(),
                ..Default::default()
            },
        )
        .await?;
    command
        .toggle(ToggleInput {
            week: helpers::week(),
            key: item.id.to_owned(),
        })
        .await?;

    command.delete_permanent_item(helpers::week(), &item.id).await?;

    let plan = store.get_meal_plan_for_week(helpers::week()).await?.unwrap();
    assert!(plan.permanent_items.is_empty());
    assert!(!plan.checked_items.contains_key(&item.id));

    let again = command.delete_permanent_item(helpers::week(), &item.id).await;
    assert!(matches!(again, Err(Error::NotFound(_))));

    Ok(())
}

#[tokio::test]
async fn test_actions_on_unknown_week_fail() {
    let store = helpers::setup_store(vec![]).await;
    let command = Command::new(store);

    let result = command.reset(helpers::week().navigate(2)).await;
    assert!(matches!(result, Err(Error::NotFound(_))));
}

#[tokio::test]
async fn test_writes_refresh_the_shared_week_cache() -> anyhow::Result<()> {
    let store = helpers::setup_store(vec![]).await;
    let cache = Arc::new(Mutex::new(WeekCache::default()));
    let planning =
        mealplanner_mealplan::Command::with_cache(store.clone(), helpers::HOUSEHOLD, cache.clone());
    let command = Command::with_cache(store, cache.clone());

    let plan = planning.load(helpers::week()).await?;
    assert!(plan.checked_items.is_empty());
    assert!(cache.lock().await.contains(&helpers::week()));

    command
        .toggle(ToggleInput {
            week: helpers::week(),
            key: "produce_Tomato".to_owned(),
        })
        .await?;
    assert!(!cache.lock().await.contains(&helpers::week()));

    let plan = planning.load(helpers::week()).await?;
    assert_eq!(plan.checked_items.get("produce_Tomato"), Some(&true));

    let item = command
        .add_permanent_item(
            helpers::week(),
            NewPermanentItem {
                name: "Coffee".to_owned(),
                ..Default::default()
            },
        )
        .await?;
    let plan = planning.load(helpers::week()).await?;
    assert_eq!(plan.permanent_items, vec![item.clone()]);

    command.delete_permanent_item(helpers::week(), &item.id).await?;
    command.reset(helpers::week()).await?;
    let plan = planning.load(helpers::week()).await?;
    assert!(plan.permanent_items.is_empty());
    assert!(plan.checked_items.is_empty());

    Ok(())
}
