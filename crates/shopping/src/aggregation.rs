use mealplanner_shared::recipe::RecipeIngredient;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::units::{self, Converted, registry};

/// One observation of an ingredient, already scaled to the planned servings.
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    pub identity: String,
    pub name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
    pub recipe_name: String,
}

impl Contribution {
    /// A missing quantity counts as 0.
    pub fn scaled(ingredient: &RecipeIngredient, ratio: f64, recipe_name: &str) -> Self {
        Self {
            identity: ingredient.identity(),
            name: ingredient.name.to_owned(),
            category: ingredient.category.to_owned(),
            quantity: ingredient.quantity.unwrap_or_default() * ratio,
            unit: ingredient.unit.to_owned(),
            recipe_name: recipe_name.to_owned(),
        }
    }

    pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = identity.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Amount {
    pub quantity: f64,
    pub unit: String,
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quantity = units::format_quantity(self.quantity);
        if self.unit.is_empty() {
            return f.write_str(&quantity);
        }

        write!(f, "{} {}", quantity, self.unit)
    }
}

/// Renders amounts as `"1.5 kg + 2 pincee"`.
pub fn display_amounts(amounts: &[Amount]) -> String {
    amounts
        .iter()
        .map(|amount| amount.to_string())
        .collect::<Vec<_>>()
        .join(" + ")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedIngredient {
    pub identity: String,
    pub name: String,
    pub category: String,
    /// Convertible groups first, then free-form units
    pub amounts: Vec<Amount>,
    /// Sorted, without duplicates
    pub from_recipes: Vec<String>,
}

impl AggregatedIngredient {
    pub fn display_quantity(&self) -> String {
        display_amounts(&self.amounts)
    }
}

#[derive(Default)]
struct Group {
    label: Option<(String, String)>,
    convertible: HashMap<&'static str, Vec<f64>>,
    other: HashMap<String, Vec<f64>>,
    recipes: BTreeSet<String>,
}

/// Stateless service merging ingredient contributions.
///
/// Contributions of one ingredient are summed per unit family in the family
/// base unit, then shown in the largest unit that keeps the quantity >= 1.
/// Units without a family (`pincee`, anything unknown) are only summed with
/// the exact same unit string. The output does not depend on input order.
pub struct IngredientAggregationService;

impl IngredientAggregationService {
    pub fn aggregate(
        contributions: impl IntoIterator<Item = Contribution>,
    ) -> Vec<AggregatedIngredient> {
        let mut groups: HashMap<String, Group> = HashMap::new();

        for contribution in contributions {
            let group = groups.entry(contribution.identity).or_default();

            let label = (contribution.name, contribution.category);
            if group.label.as_ref().is_none_or(|current| label < *current) {
                group.label = Some(label);
            }

            match units::convert_to_base(contribution.quantity, &contribution.unit) {
                Converted::Base { quantity, unit } => {
                    group.convertible.entry(unit).or_default().push(quantity);
                }
                Converted::Unchanged { quantity, unit } => {
                    group
                        .other
                        .entry(unit.to_owned())
                        .or_default()
                        .push(quantity);
                }
            }

            group.recipes.insert(contribution.recipe_name);
        }

        let mut aggregated = groups
            .into_iter()
            .map(|(identity, group)| Self::finish(identity, group))
            .collect::<Vec<_>>();

        aggregated.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.identity.cmp(&b.identity))
        });

        aggregated
    }

    fn finish(identity: String, group: Group) -> AggregatedIngredient {
        let (name, category) = group.label.unwrap_or_default();

        let mut convertible = group.convertible.into_iter().collect::<Vec<_>>();
        convertible.sort_by_key(|(base, _)| (registry().position(base), *base));

        let mut other = group.other.into_iter().collect::<Vec<_>>();
        other.sort_by(|a, b| a.0.cmp(&b.0));

        let mut amounts = convertible
            .into_iter()
            .map(|(base, values)| {
                let display = units::best_display_unit(sum(values), base);
                Amount {
                    quantity: display.quantity,
                    unit: display.unit,
                }
            })
            .collect::<Vec<_>>();

        amounts.extend(other.into_iter().map(|(unit, values)| Amount {
            quantity: units::round_quantity(sum(values)),
            unit,
        }));

        AggregatedIngredient {
            identity,
            name,
            category,
            amounts,
            from_recipes: group.recipes.into_iter().collect(),
        }
    }
}

// summed in a fixed order so the result does not depend on input order
fn sum(mut values: Vec<f64>) -> f64 {
    values.sort_by(f64::total_cmp);
    values.into_iter().sum()
}
