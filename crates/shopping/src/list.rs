//! Shopping list of a week: scaled recipe needs, permanent items and check
//! state, grouped by category.

use mealplanner_mealplan::DemandItem;
use mealplanner_shared::{recipe::Recipe, shopping::PermanentItem};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::aggregation::{Amount, Contribution, IngredientAggregationService, display_amounts};
use crate::check_state::CheckState;
use crate::units;

pub const CHECKED_CATEGORY_LABEL: &str = "✓ Cochés";

/// Source of recipes for a list build.
pub trait RecipeBook {
    fn recipe(&self, id: &str) -> Option<&Recipe>;
}

impl RecipeBook for HashMap<String, Recipe> {
    fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.get(id)
    }
}

impl RecipeBook for [Recipe] {
    fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.iter().find(|recipe| recipe.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum ListCategory {
    Named(String),
    /// Checked permanent items, always listed last
    Checked,
}

impl ListCategory {
    pub fn label(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::Checked => CHECKED_CATEGORY_LABEL,
        }
    }
}

impl fmt::Display for ListCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Ord for ListCategory {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Named(a), Self::Named(b)) => compare_names(a, b),
            (Self::Named(_), Self::Checked) => Ordering::Less,
            (Self::Checked, Self::Named(_)) => Ordering::Greater,
            (Self::Checked, Self::Checked) => Ordering::Equal,
        }
    }
}

impl PartialOrd for ListCategory {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShoppingListEntry {
    /// Check-state key: permanent item id, or `"{category}_{name}"`
    pub key: String,
    pub name: String,
    /// Declared category, kept even when listed under the checked group
    pub category: String,
    pub amounts: Vec<Amount>,
    pub is_permanent: bool,
    pub from_recipes: Vec<String>,
    pub checked: bool,
}

impl ShoppingListEntry {
    pub fn display_quantity(&self) -> String {
        display_amounts(&self.amounts)
    }

    fn from_permanent(item: &PermanentItem, checked: bool) -> Self {
        let amounts = item
            .quantity
            .map(|quantity| Amount {
                quantity: units::round_quantity(quantity),
                unit: item.unit.to_owned(),
            })
            .into_iter()
            .collect();

        Self {
            key: item.id.to_owned(),
            name: item.name.to_owned(),
            category: item.category.to_owned(),
            amounts,
            is_permanent: true,
            from_recipes: vec![],
            checked,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup {
    pub category: ListCategory,
    pub items: Vec<ShoppingListEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShoppingList {
    pub categories: Vec<CategoryGroup>,
    checked_count: usize,
}

impl ShoppingList {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn total_items(&self) -> usize {
        self.categories.iter().map(|group| group.items.len()).sum()
    }

    /// Number of checked keys in the week's check state.
    pub fn checked_count(&self) -> usize {
        self.checked_count
    }

    pub fn category(&self, name: &str) -> Option<&CategoryGroup> {
        self.categories
            .iter()
            .find(|group| group.category == ListCategory::Named(name.to_owned()))
    }

    pub fn checked(&self) -> Option<&CategoryGroup> {
        self.categories
            .iter()
            .find(|group| group.category == ListCategory::Checked)
    }

    pub fn entries(&self) -> impl Iterator<Item = &ShoppingListEntry> {
        self.categories.iter().flat_map(|group| group.items.iter())
    }

    pub fn entry(&self, key: &str) -> Option<&ShoppingListEntry> {
        self.entries().find(|entry| entry.key == key)
    }
}

pub struct BuildInput<'a, R: RecipeBook + ?Sized> {
    pub demand: &'a [DemandItem],
    pub recipes: &'a R,
    pub permanent_items: &'a [PermanentItem],
    pub check_state: &'a CheckState,
}

/// Stateless service turning a week's demand into a shopping list.
pub struct ShoppingListService;

impl ShoppingListService {
    pub fn build<R: RecipeBook + ?Sized>(input: BuildInput<'_, R>) -> ShoppingList {
        let mut contributions = vec![];

        for demand in input.demand {
            let Some(recipe) = input.recipes.recipe(&demand.recipe_id) else {
                tracing::debug!(recipe_id = %demand.recipe_id, "recipe not found, skipped");
                continue;
            };

            let ratio = recipe.servings_ratio(demand.servings);
            for ingredient in &recipe.ingredients {
                let key = entry_key(&ingredient.category, &ingredient.name);
                contributions
                    .push(Contribution::scaled(ingredient, ratio, &recipe.name).with_identity(key));
            }
        }

        let mut groups: BTreeMap<ListCategory, Vec<ShoppingListEntry>> = BTreeMap::new();

        for ingredient in IngredientAggregationService::aggregate(contributions) {
            let checked = input.check_state.is_checked(&ingredient.identity);
            groups
                .entry(ListCategory::Named(ingredient.category.to_owned()))
                .or_default()
                .push(ShoppingListEntry {
                    key: ingredient.identity,
                    name: ingredient.name,
                    category: ingredient.category,
                    amounts: ingredient.amounts,
                    is_permanent: false,
                    from_recipes: ingredient.from_recipes,
                    checked,
                });
        }

        for item in input.permanent_items {
            let checked = input.check_state.is_checked(&item.id);
            let category = if checked {
                ListCategory::Checked
            } else {
                ListCategory::Named(item.category.to_owned())
            };

            groups
                .entry(category)
                .or_default()
                .push(ShoppingListEntry::from_permanent(item, checked));
        }

        let categories = groups
            .into_iter()
            .map(|(category, mut items)| {
                items.sort_by(|a, b| {
                    compare_names(&a.name, &b.name)
                        .then_with(|| a.is_permanent.cmp(&b.is_permanent))
                        .then_with(|| a.key.cmp(&b.key))
                });

                CategoryGroup { category, items }
            })
            .collect();

        ShoppingList {
            categories,
            checked_count: input.check_state.checked_count(),
        }
    }
}

/// Check-state key of a recipe-derived entry.
pub fn entry_key(category: &str, name: &str) -> String {
    format!("{category}_{name}")
}
