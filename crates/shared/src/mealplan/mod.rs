mod slot;
mod week;

pub use slot::*;
pub use week::*;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::{Date, OffsetDateTime};

use crate::shopping::PermanentItem;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RecipeMeal {
    pub recipe_id: String,
    pub recipe_name: String,
    pub servings: u32,
    /// Member slots of the multi-day occurrence this slot belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_day: Option<Vec<SlotId>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CustomMeal {
    pub name: String,
    pub servings: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_day: Option<Vec<SlotId>>,
}

/// Content of a calendar slot or an extra meal.
///
/// Custom meals have no recipe behind them and never add anything to the
/// shopping list.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MealAssignment {
    Recipe(RecipeMeal),
    Custom(CustomMeal),
}

impl MealAssignment {
    pub fn recipe(
        recipe_id: impl Into<String>,
        recipe_name: impl Into<String>,
        servings: u32,
    ) -> Self {
        Self::Recipe(RecipeMeal {
            recipe_id: recipe_id.into(),
            recipe_name: recipe_name.into(),
            servings,
            multi_day: None,
        })
    }

    pub fn custom(name: impl Into<String>, servings: u32) -> Self {
        Self::Custom(CustomMeal {
            name: name.into(),
            servings,
            multi_day: None,
        })
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Recipe(meal) => &meal.recipe_name,
            Self::Custom(meal) => &meal.name,
        }
    }

    pub fn servings(&self) -> u32 {
        match self {
            Self::Recipe(meal) => meal.servings,
            Self::Custom(meal) => meal.servings,
        }
    }

    pub fn multi_day(&self) -> Option<&[SlotId]> {
        match self {
            Self::Recipe(meal) => meal.multi_day.as_deref(),
            Self::Custom(meal) => meal.multi_day.as_deref(),
        }
    }

    pub fn is_multi_day(&self) -> bool {
        self.multi_day().is_some()
    }

    pub fn with_multi_day(mut self, slots: Vec<SlotId>) -> Self {
        match &mut self {
            Self::Recipe(meal) => meal.multi_day = Some(slots),
            Self::Custom(meal) => meal.multi_day = Some(slots),
        }
        self
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtraMeal {
    pub id: String,
    pub meal: MealAssignment,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WeekPlan {
    pub id: String,
    pub household_id: String,
    pub week: WeekKey,
    pub start_date: Date,
    pub end_date: Date,
    #[serde(default)]
    pub meals: BTreeMap<SlotId, MealAssignment>,
    #[serde(default)]
    pub extras: Vec<ExtraMeal>,
    #[serde(default)]
    pub permanent_items: Vec<PermanentItem>,
    #[serde(default)]
    pub checked_items: BTreeMap<String, bool>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl WeekPlan {
    /// Empty plan for a week, as created the first time the week is opened.
    pub fn empty(household_id: impl Into<String>, week: WeekKey, now: OffsetDateTime) -> Self {
        let household_id = household_id.into();

        Self {
            id: week.plan_id(&household_id),
            household_id,
            week,
            start_date: week.start_date(),
            end_date: week.end_date(),
            meals: BTreeMap::new(),
            extras: vec![],
            permanent_items: vec![],
            checked_items: BTreeMap::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
