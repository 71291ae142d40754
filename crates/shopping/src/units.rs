//! Unit registry and conversions
//!
//! Every convertible unit belongs to a family (weight, volume, piece) whose
//! canonical unit has a factor of 1. Quantities are merged in the canonical
//! unit and displayed in the largest unit that keeps the magnitude >= 1
//! (1500 g is shown as 1.5 kg).

use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
    Serialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    Weight,
    Volume,
    Piece,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Unit {
    pub id: &'static str,
    pub label: &'static str,
    pub category: UnitCategory,
    /// Canonical unit of the family, `None` when the unit cannot be converted
    pub base_unit: Option<&'static str>,
    /// How many base units one of this unit holds, 0 when not convertible
    pub factor: f64,
}

pub static UNITS: [Unit; 8] = [
    Unit {
        id: "g",
        label: "g",
        category: UnitCategory::Weight,
        base_unit: Some("g"),
        factor: 1.0,
    },
    Unit {
        id: "kg",
        label: "kg",
        category: UnitCategory::Weight,
        base_unit: Some("g"),
        factor: 1000.0,
    },
    Unit {
        id: "ml",
        label: "ml",
        category: UnitCategory::Volume,
        base_unit: Some("ml"),
        factor: 1.0,
    },
    Unit {
        id: "l",
        label: "L",
        category: UnitCategory::Volume,
        base_unit: Some("ml"),
        factor: 1000.0,
    },
    Unit {
        id: "cuillere-cafe",
        label: "c. à café",
        category: UnitCategory::Volume,
        base_unit: Some("ml"),
        factor: 5.0,
    },
    Unit {
        id: "cuillere-soupe",
        label: "c. à soupe",
        category: UnitCategory::Volume,
        base_unit: Some("ml"),
        factor: 15.0,
    },
    Unit {
        id: "piece",
        label: "unité(s)",
        category: UnitCategory::Piece,
        base_unit: Some("piece"),
        factor: 1.0,
    },
    Unit {
        id: "pincee",
        label: "pincée(s)",
        category: UnitCategory::Other,
        base_unit: None,
        factor: 0.0,
    },
];

/// Result of [`UnitRegistry::convert_to_base`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Converted<'a> {
    /// Quantity expressed in the canonical unit of its family
    Base { quantity: f64, unit: &'static str },
    /// Unknown or non-convertible unit, returned as given
    Unchanged { quantity: f64, unit: &'a str },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayQuantity {
    pub quantity: f64,
    pub unit: String,
    pub label: String,
}

pub struct UnitRegistry {
    units: &'static [Unit],
    index: HashMap<&'static str, usize>,
    /// Units sharing a base unit, largest factor first
    ladders: HashMap<&'static str, Vec<usize>>,
    by_category: Vec<(UnitCategory, Vec<&'static Unit>)>,
}

static REGISTRY: LazyLock<UnitRegistry> = LazyLock::new(|| UnitRegistry::new(&UNITS));

pub fn registry() -> &'static UnitRegistry {
    &REGISTRY
}

impl UnitRegistry {
    pub fn new(units: &'static [Unit]) -> Self {
        let index = units
            .iter()
            .enumerate()
            .map(|(pos, unit)| (unit.id, pos))
            .collect::<HashMap<_, _>>();

        let mut ladders: HashMap<&'static str, Vec<usize>> = HashMap::new();
        for (pos, unit) in units.iter().enumerate() {
            if let Some(base) = unit.base_unit {
                ladders.entry(base).or_default().push(pos);
            }
        }
        for ladder in ladders.values_mut() {
            ladder.sort_by(|a, b| units[*b].factor.total_cmp(&units[*a].factor));
        }

        let by_category = UnitCategory::VARIANTS
            .iter()
            .map(|category| {
                let units = units
                    .iter()
                    .filter(|u| u.category == *category)
                    .collect::<Vec<_>>();
                (*category, units)
            })
            .collect();

        Self {
            units,
            index,
            ladders,
            by_category,
        }
    }

    pub fn get(&self, id: &str) -> Option<&'static Unit> {
        let units = self.units;
        self.index.get(id).map(|pos| &units[*pos])
    }

    /// Position of the unit in the registry, used to order display fragments.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Unit> {
        self.units.iter()
    }

    /// Registry grouped by category, in registry order.
    pub fn units_by_category(&self) -> &[(UnitCategory, Vec<&'static Unit>)] {
        &self.by_category
    }

    pub fn convert_to_base<'a>(&self, quantity: f64, unit_id: &'a str) -> Converted<'a> {
        let Some(unit) = self.get(unit_id) else {
            return Converted::Unchanged {
                quantity,
                unit: unit_id,
            };
        };

        match unit.base_unit {
            Some(base) if unit.factor > 0.0 => Converted::Base {
                quantity: quantity * unit.factor,
                unit: base,
            },
            _ => Converted::Unchanged {
                quantity,
                unit: unit_id,
            },
        }
    }

    /// Picks the largest unit of the family that keeps `quantity >= 1`,
    /// falling back to the base unit. Rounded to two decimals.
    pub fn best_display_unit(&self, quantity: f64, base_unit: &str) -> DisplayQuantity {
        if let Some(ladder) = self.ladders.get(base_unit) {
            for pos in ladder {
                let unit = &self.units[*pos];
                let converted = quantity / unit.factor;
                if converted >= 1.0 || unit.id == base_unit {
                    return DisplayQuantity {
                        quantity: round_quantity(converted),
                        unit: unit.id.to_owned(),
                        label: unit.label.to_owned(),
                    };
                }
            }
        }

        let label = self
            .get(base_unit)
            .map(|u| u.label)
            .unwrap_or(base_unit)
            .to_owned();

        DisplayQuantity {
            quantity: round_quantity(quantity),
            unit: base_unit.to_owned(),
            label,
        }
    }
}

pub fn convert_to_base(quantity: f64, unit_id: &str) -> Converted<'_> {
    registry().convert_to_base(quantity, unit_id)
}

pub fn best_display_unit(quantity: f64, base_unit: &str) -> DisplayQuantity {
    registry().best_display_unit(quantity, base_unit)
}

/// Rounds to two decimals.
pub fn round_quantity(quantity: f64) -> f64 {
    let rounded = (quantity * 100.0).round() / 100.0;
    // avoid printing "-0"
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Formats a quantity without trailing zeros: 400 -> "400", 1.50 -> "1.5".
pub fn format_quantity(quantity: f64) -> String {
    format!("{}", round_quantity(quantity))
}
