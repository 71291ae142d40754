use serde::{Deserialize, Serialize};

use crate::DEFAULT_CATEGORY;

fn default_category() -> String {
    DEFAULT_CATEGORY.to_owned()
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RecipeIngredient {
    /// Catalog id of the ingredient, when the recipe was built from the catalog
    #[serde(default)]
    pub ingredient_id: Option<String>,
    pub name: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: String,
}

impl RecipeIngredient {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            ingredient_id: None,
            name: name.into(),
            category: category.into(),
            quantity: Some(quantity),
            unit: unit.into(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.ingredient_id = Some(id.into());
        self
    }

    /// Identity used to merge contributions of the same ingredient.
    ///
    /// Falls back to `category_name` for ingredients typed by hand, which
    /// matches the check-state key of the resulting shopping-list entry.
    pub fn identity(&self) -> String {
        match &self.ingredient_id {
            Some(id) => id.to_owned(),
            None => format!("{}_{}", self.category, self.name),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
}

impl Recipe {
    /// Native serving count used as the scaling denominator, never zero.
    pub fn native_servings(&self) -> u32 {
        match self.servings {
            Some(servings) if servings > 0 => servings,
            _ => 1,
        }
    }

    pub fn servings_ratio(&self, servings: u32) -> f64 {
        servings as f64 / self.native_servings() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(servings: Option<u32>) -> Recipe {
        Recipe {
            id: "pasta-id".to_owned(),
            name: "Pasta".to_owned(),
            servings,
            ingredients: vec![],
        }
    }

    #[test]
    fn test_servings_ratio() {
        assert_eq!(recipe(Some(4)).servings_ratio(2), 0.5);
        assert_eq!(recipe(Some(2)).servings_ratio(6), 3.0);
    }

    #[test]
    fn test_missing_or_zero_servings_defaults_to_one() {
        assert_eq!(recipe(None).native_servings(), 1);
        assert_eq!(recipe(Some(0)).native_servings(), 1);
        assert_eq!(recipe(Some(0)).servings_ratio(3), 3.0);
    }

    #[test]
    fn test_identity_prefers_catalog_id() {
        let tomato = RecipeIngredient::new("Tomato", "produce", 800.0, "g");
        assert_eq!(tomato.identity(), "produce_Tomato");
        assert_eq!(tomato.with_id("ing-1").identity(), "ing-1");
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let ingredient: RecipeIngredient =
            serde_json::from_str(r#"{"name":"Salt"}"#).unwrap();
        assert_eq!(ingredient.category, DEFAULT_CATEGORY);
        assert_eq!(ingredient.quantity, None);
        assert_eq!(ingredient.unit, "");
    }
}
