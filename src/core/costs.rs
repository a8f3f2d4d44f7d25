use std::collections::HashMap;

use crate::domain::model::{CostLine, Dish, DishRecord, SelectionSummary, UnitPrice};
use crate::utils::error::Result;

/// Merges the ingredient lines of every dish in the selection and prices the
/// merged lines.
///
/// Lines are grouped by ingredient id across all dishes, amounts summed, and
/// the merged rows kept in first-appearance order. All arithmetic is raw
/// floating point; rounding for display belongs to the caller.
pub fn aggregate_selection(dishes: &[Dish]) -> SelectionSummary {
    struct Merged {
        name: String,
        price: UnitPrice,
        amount: f64,
    }

    let mut order: Vec<String> = Vec::new();
    let mut merged: HashMap<String, Merged> = HashMap::new();

    for dish in dishes {
        for line in &dish.lines {
            let ingredient = &line.ingredient;
            match merged.get_mut(&ingredient.id) {
                Some(entry) => entry.amount += line.amount,
                None => {
                    order.push(ingredient.id.clone());
                    merged.insert(
                        ingredient.id.clone(),
                        Merged {
                            name: ingredient.name.clone(),
                            price: ingredient.price,
                            amount: line.amount,
                        },
                    );
                }
            }
        }
    }

    let mut lines = Vec::with_capacity(order.len());
    let mut total_cost = 0.0;
    for id in &order {
        let entry = &merged[id];
        let line_cost = line_cost(entry.price, entry.amount);
        total_cost += line_cost;
        lines.push(CostLine {
            ingredient_name: entry.name.clone(),
            unit_type: entry.price.unit_type(),
            total_amount: entry.amount,
            unit_price_display: entry.price.display_value(),
            line_cost,
        });
    }

    SelectionSummary { lines, total_cost }
}

/// Entry point for callers holding raw records, e.g. the client-side
/// selection view over already-fetched dishes. Conversion surfaces
/// `MalformedIngredientError` before any pricing happens.
pub fn summarize_selection(records: Vec<DishRecord>) -> Result<SelectionSummary> {
    let dishes = records
        .into_iter()
        .map(Dish::try_from)
        .collect::<Result<Vec<_>>>()?;
    Ok(aggregate_selection(&dishes))
}

fn line_cost(price: UnitPrice, amount: f64) -> f64 {
    match price {
        UnitPrice::PerUnit(per_unit) => amount * per_unit,
        // Gram prices are quoted per 100-gram block.
        UnitPrice::Per100Grams(per_100g) => (amount / 100.0) * per_100g,
        UnitPrice::PerLiter(per_liter) => amount * per_liter,
    }
}
