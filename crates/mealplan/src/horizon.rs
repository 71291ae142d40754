//! Selection of the meals that still lie ahead.
//!
//! A slot counts when its date is today or later (date-only comparison).
//! Multi-day meals are copied into each of their member slots; only the first
//! member still ahead is kept. Extra meals have no date and always count.

use mealplanner_shared::mealplan::{ExtraMeal, MealAssignment, SlotId, WeekPlan};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use time::{Date, Duration};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MealOrigin {
    Slot { slot: SlotId, date: Date },
    Extra { id: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedMeal<'a> {
    pub origin: MealOrigin,
    pub meal: &'a MealAssignment,
}

/// One recipe to cook at a given number of servings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemandItem {
    pub recipe_id: String,
    pub recipe_name: String,
    pub servings: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Horizon<'a> {
    meals: Vec<PlannedMeal<'a>>,
}

impl<'a> Horizon<'a> {
    pub fn select(
        start_date: Date,
        meals: &'a BTreeMap<SlotId, MealAssignment>,
        extras: &'a [ExtraMeal],
        today: Date,
    ) -> Self {
        let mut seen_multi_day = HashSet::new();
        let mut selected = vec![];

        for (slot, meal) in meals {
            let date = start_date + Duration::days(slot.day.offset());
            if date < today {
                continue;
            }

            if let Some(members) = meal.multi_day()
                && !seen_multi_day.insert(multi_day_key(*slot, members))
            {
                continue;
            }

            selected.push(PlannedMeal {
                origin: MealOrigin::Slot { slot: *slot, date },
                meal,
            });
        }

        selected.extend(extras.iter().map(|extra| PlannedMeal {
            origin: MealOrigin::Extra {
                id: extra.id.to_owned(),
            },
            meal: &extra.meal,
        }));

        Self { meals: selected }
    }

    pub fn from_plan(plan: &'a WeekPlan, today: Date) -> Self {
        Self::select(plan.start_date, &plan.meals, &plan.extras, today)
    }

    pub fn meals(&self) -> &[PlannedMeal<'a>] {
        &self.meals
    }

    /// Recipe demand of the selected meals; custom meals need no shopping.
    pub fn demand(&self) -> Vec<DemandItem> {
        self.meals
            .iter()
            .filter_map(|planned| match planned.meal {
                MealAssignment::Recipe(meal) => Some(DemandItem {
                    recipe_id: meal.recipe_id.to_owned(),
                    recipe_name: meal.recipe_name.to_owned(),
                    servings: meal.servings,
                }),
                MealAssignment::Custom(_) => None,
            })
            .collect()
    }
}

/// Identity shared by all the slots of one multi-day occurrence.
///
/// Two distinct occurrences declaring the same member set share a key and are
/// counted once.
pub fn multi_day_key(slot: SlotId, members: &[SlotId]) -> String {
    if members.is_empty() {
        return slot.to_string();
    }

    let mut ids = members.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    ids.sort();
    ids.join("_")
}
