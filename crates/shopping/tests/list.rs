use mealplanner_shared::{
    mealplan::{DayKey, MealAssignment, SlotId, SlotType},
    recipe::RecipeIngredient,
    shopping::NewPermanentItem,
};
use mealplanner_shopping::{CHECKED_CATEGORY_LABEL, Command, ListCategory, Query, ToggleInput};
use time::macros::date;

mod helpers;

const WEDNESDAY: time::Date = date!(2025 - 01 - 22);

#[tokio::test]
async fn test_scaled_recipe_entry() -> anyhow::Result<()> {
    let store = helpers::setup_store(vec![helpers::pasta()]).await;
    helpers::plan_meals(
        &store,
        vec![(
            SlotId::new(DayKey::Wednesday, SlotType::Dinner),
            MealAssignment::recipe("pasta-id", "Pasta", 2),
        )],
    )
    .await;

    let list = Query::new(store).list(helpers::week(), WEDNESDAY).await?;

    assert_eq!(list.total_items(), 1);
    let produce = list.category("produce").unwrap();
    assert_eq!(produce.items[0].name, "Tomato");
    assert_eq!(produce.items[0].display_quantity(), "400 g");

    Ok(())
}

#[tokio::test]
async fn test_past_meals_are_ignored() -> anyhow::Result<()> {
    let store = helpers::setup_store(vec![helpers::pasta()]).await;
    helpers::plan_meals(
        &store,
        vec![
            (
                SlotId::new(DayKey::Monday, SlotType::Lunch),
                MealAssignment::recipe("pasta-id", "Pasta", 4),
            ),
            (
                SlotId::new(DayKey::Wednesday, SlotType::Dinner),
                MealAssignment::recipe("pasta-id", "Pasta", 2),
            ),
        ],
    )
    .await;

    let list = Query::new(store).list(helpers::week(), WEDNESDAY).await?;
    let tomato = list.entry("produce_Tomato").unwrap();

    assert_eq!(tomato.display_quantity(), "400 g");

    Ok(())
}

#[tokio::test]
async fn test_multi_day_meal_is_bought_once() -> anyhow::Result<()> {
    let store = helpers::setup_store(vec![helpers::pasta()]).await;
    let members = vec![
        SlotId::new(DayKey::Thursday, SlotType::Lunch),
        SlotId::new(DayKey::Thursday, SlotType::Dinner),
    ];
    let meal = MealAssignment::recipe("pasta-id", "Pasta", 4).with_multi_day(members.clone());
    helpers::plan_meals(
        &store,
        members.into_iter().map(|slot| (slot, meal.clone())).collect(),
    )
    .await;

    let list = Query::new(store).list(helpers::week(), WEDNESDAY).await?;

    assert_eq!(list.entry("produce_Tomato").unwrap().display_quantity(), "800 g");

    Ok(())
}

#[tokio::test]
async fn test_units_are_merged_across_recipes() -> anyhow::Result<()> {
    let bread = helpers::recipe(
        "bread-id",
        "Bread",
        vec![RecipeIngredient::new("Flour", "baking", 1000.0, "g")],
    );
    let cake = helpers::recipe(
        "cake-id",
        "Cake",
        vec![RecipeIngredient::new("Flour", "baking", 0.5, "kg")],
    );
    let store = helpers::setup_store(vec![bread, cake]).await;
    helpers::plan_meals(
        &store,
        vec![
            (
                SlotId::new(DayKey::Friday, SlotType::Lunch),
                MealAssignment::recipe("bread-id", "Bread", 1),
            ),
            (
                SlotId::new(DayKey::Saturday, SlotType::Dinner),
                MealAssignment::recipe("cake-id", "Cake", 1),
            ),
        ],
    )
    .await;

    let list = Query::new(store).list(helpers::week(), WEDNESDAY).await?;
    let flour = list.entry("baking_Flour").unwrap();

    assert_eq!(flour.display_quantity(), "1.5 kg");
    assert_eq!(flour.from_recipes, vec!["Bread", "Cake"]);

    Ok(())
}

#[tokio::test]
async fn test_missing_recipes_custom_meals_and_extras() -> anyhow::Result<()> {
    let store = helpers::setup_store(vec![helpers::pasta()]).await;
    helpers::plan_meals(
        &store,
        vec![
            (
                SlotId::new(DayKey::Thursday, SlotType::Lunch),
                MealAssignment::recipe("deleted-id", "Gone", 2),
            ),
            (
                SlotId::new(DayKey::Thursday, SlotType::Dinner),
                MealAssignment::custom("Restaurant", 2),
            ),
        ],
    )
    .await;

    let query = Query::new(store.clone());
    assert!(query.list(helpers::week(), WEDNESDAY).await?.is_empty());

    let mealplan = mealplanner_mealplan::Command::new(store, helpers::HOUSEHOLD);
    mealplan
        .add_extra(helpers::week(), MealAssignment::recipe("pasta-id", "Pasta", 4))
        .await?;

    // extras count even once the week is over
    let list = query.list(helpers::week(), date!(2025 - 02 - 01)).await?;
    assert_eq!(list.entry("produce_Tomato").unwrap().display_quantity(), "800 g");

    Ok(())
}

#[tokio::test]
async fn test_unplanned_week_gives_empty_list() -> anyhow::Result<()> {
    let store = helpers::setup_store(vec![]).await;
    let list = Query::new(store)
        .list(helpers::week().navigate(1), WEDNESDAY)
        .await?;

    assert!(list.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_checked_permanent_item_moves_to_checked_group() -> anyhow::Result<()> {
    let store = helpers::setup_store(vec![]).await;
    let command = Command::new(store.clone());
    let query = Query::new(store);

    let item = command
        .add_permanent_item(
            helpers::week(),
            NewPermanentItem {
                name: "Paper towels".to_owned(),
                category: Some("other".to_owned()),
                ..Default::default()
            },
        )
        .await?;

    let list = query.list(helpers::week(), WEDNESDAY).await?;
    assert_eq!(list.category("other").unwrap().items[0].key, item.id);
    assert!(list.checked().is_none());

    let checked = command
        .toggle(ToggleInput {
            week: helpers::week(),
            key: item.id.to_owned(),
        })
        .await?;
    assert!(checked);

    let list = query.list(helpers::week(), WEDNESDAY).await?;
    assert!(list.category("other").is_none());
    let group = list.checked().unwrap();
    assert_eq!(group.category, ListCategory::Checked);
    assert_eq!(group.category.label(), CHECKED_CATEGORY_LABEL);
    assert_eq!(group.items[0].name, "Paper towels");
    assert_eq!(group.items[0].category, "other");
    assert_eq!(list.checked_count(), 1);

    Ok(())
}
