//! Plain-text rendering of the command outputs.

use mealplanner_mealplan::WeekDay;
use mealplanner_shared::mealplan::{SlotId, SlotType, WeekPlan};
use mealplanner_shopping::{ShoppingList, units::registry};
use std::fmt::Write;
use strum::VariantArray;

pub fn shopping_list(list: &ShoppingList) -> String {
    if list.is_empty() {
        return "Nothing to buy.\n".to_owned();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} items, {} checked",
        list.total_items(),
        list.checked_count()
    );

    for group in &list.categories {
        let _ = writeln!(out, "\n{}", group.category);

        for entry in &group.items {
            let mark = if entry.checked { "x" } else { " " };
            let _ = write!(out, "  [{mark}] {}", entry.name);

            let quantity = entry.display_quantity();
            if !quantity.is_empty() {
                let _ = write!(out, ": {quantity}");
            }

            if !entry.from_recipes.is_empty() {
                let _ = write!(out, " ({})", entry.from_recipes.join(", "));
            }

            let _ = writeln!(out, "  <{}>", entry.key);
        }
    }

    out
}

pub fn week_plan(plan: &WeekPlan, days: &[WeekDay]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({} to {})",
        plan.week, plan.start_date, plan.end_date
    );

    for day in days {
        let past = if day.is_past { " (past)" } else { "" };
        let _ = writeln!(out, "\n{} {}{past}", day.day, day.date);

        for slot in SlotType::VARIANTS {
            let id = SlotId::new(day.day, *slot);
            let meal = plan
                .meals
                .get(&id)
                .map(|meal| {
                    let multi = meal
                        .multi_day()
                        .and_then(|members| {
                            let pos = members.iter().position(|member| *member == id)?;
                            Some(format!(" [multi-day {}/{}]", pos + 1, members.len()))
                        })
                        .or_else(|| meal.is_multi_day().then(|| " [multi-day]".to_owned()))
                        .unwrap_or_default();
                    format!("{} x{}{multi}", meal.name(), meal.servings())
                })
                .unwrap_or_else(|| "-".to_owned());

            let _ = writeln!(out, "  {slot:<6} {meal}");
        }
    }

    if !plan.extras.is_empty() {
        let _ = writeln!(out, "\nextras");
        for extra in &plan.extras {
            let _ = writeln!(
                out,
                "  {} x{}  <{}>",
                extra.meal.name(),
                extra.meal.servings(),
                extra.id
            );
        }
    }

    out
}

pub fn units() -> String {
    let mut out = String::new();

    for (category, units) in registry().units_by_category() {
        let _ = writeln!(out, "{category}");
        for unit in units {
            let base = match unit.base_unit {
                Some(base) => format!("= {} {}", unit.factor, base),
                None => "not convertible".to_owned(),
            };
            let _ = writeln!(out, "  {:<16} {:<12} {base}", unit.id, unit.label);
        }
    }

    out
}
