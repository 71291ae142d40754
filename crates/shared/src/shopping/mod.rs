use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use validator::Validate;

use crate::DEFAULT_CATEGORY;

fn default_category() -> String {
    DEFAULT_CATEGORY.to_owned()
}

/// Shopping-list line declared by hand, independent of any recipe.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PermanentItem {
    pub id: String,
    pub name: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub quantity: Option<f64>,
    /// Free-form, not necessarily a registry unit
    #[serde(default)]
    pub unit: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Validate, Clone, Debug, Default, PartialEq)]
pub struct NewPermanentItem {
    #[validate(
        length(min = 1, message = "Item name is required"),
        custom(function = "validate_not_blank")
    )]
    pub name: String,
    pub category: Option<String>,
    #[validate(custom(function = "validate_finite_quantity"))]
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}

fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("blank")
            .with_message("Item name is required".into()));
    }
    Ok(())
}

fn validate_finite_quantity(quantity: f64) -> Result<(), validator::ValidationError> {
    if !quantity.is_finite() {
        return Err(validator::ValidationError::new("quantity_not_finite")
            .with_message("Item quantity must be a number".into()));
    }
    Ok(())
}

impl PermanentItem {
    /// Builds the stored item from user input: trims the name, defaults the
    /// category and generates a stable id.
    pub fn create(input: NewPermanentItem, now: OffsetDateTime) -> Self {
        let category = input
            .category
            .map(|c| c.trim().to_owned())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(default_category);

        Self {
            id: format!("permanent_{}", ulid::Ulid::new()),
            name: input.name.trim().to_owned(),
            category,
            quantity: input.quantity,
            unit: input.unit.unwrap_or_default().trim().to_owned(),
            created_at: now,
        }
    }
}
