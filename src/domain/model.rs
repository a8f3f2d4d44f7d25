use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::utils::error::{DishError, Result};
use crate::utils::validation::validate_positive_amount;

/// Dietary/category label on an ingredient. The vocabulary is open: tags the
/// rule table does not know about are carried through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitType {
    Unit,
    Gram,
    Liter,
}

impl UnitType {
    /// Wire name of the price field this unit type requires on an
    /// ingredient record.
    pub fn price_field(&self) -> &'static str {
        match self {
            UnitType::Unit => "pricePerUnit",
            UnitType::Gram => "pricePer100g",
            UnitType::Liter => "pricePerLiter",
        }
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UnitType::Unit => "unit",
            UnitType::Gram => "gram",
            UnitType::Liter => "liter",
        };
        f.write_str(name)
    }
}

/// Price of an ingredient, tagged by the unit type it is quoted against.
/// Exactly one variant exists per ingredient, so "exactly one price field
/// populated" holds by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnitPrice {
    PerUnit(f64),
    /// Quoted per 100-gram block, not per gram.
    Per100Grams(f64),
    PerLiter(f64),
}

impl UnitPrice {
    pub fn unit_type(&self) -> UnitType {
        match self {
            UnitPrice::PerUnit(_) => UnitType::Unit,
            UnitPrice::Per100Grams(_) => UnitType::Gram,
            UnitPrice::PerLiter(_) => UnitType::Liter,
        }
    }

    /// The quoted figure, shown to clients next to the unit type.
    pub fn display_value(&self) -> f64 {
        match self {
            UnitPrice::PerUnit(v) | UnitPrice::Per100Grams(v) | UnitPrice::PerLiter(v) => *v,
        }
    }
}

/// Ingredient as stored in the document database and shipped to the client:
/// three mutually exclusive optional price fields, discriminated by
/// `unitType`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientRecord {
    pub id: String,
    pub name: String,
    pub unit_type: UnitType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_unit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "pricePer100g")]
    pub price_per_100g: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_liter: Option<f64>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// Validated ingredient with the price collapsed into its tagged form.
#[derive(Debug, Clone)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub price: UnitPrice,
    pub tags: Vec<Tag>,
}

impl Ingredient {
    pub fn unit_type(&self) -> UnitType {
        self.price.unit_type()
    }
}

impl TryFrom<IngredientRecord> for Ingredient {
    type Error = DishError;

    fn try_from(record: IngredientRecord) -> Result<Self> {
        let raw = match record.unit_type {
            UnitType::Unit => record.price_per_unit,
            UnitType::Gram => record.price_per_100g,
            UnitType::Liter => record.price_per_liter,
        };

        // Missing or non-numeric price for the declared unit type fails;
        // never substitute zero.
        let value = match raw {
            Some(v) if v.is_finite() => v,
            _ => {
                return Err(DishError::MalformedIngredientError {
                    name: record.name,
                    unit_type: record.unit_type,
                    price_field: record.unit_type.price_field(),
                })
            }
        };

        let price = match record.unit_type {
            UnitType::Unit => UnitPrice::PerUnit(value),
            UnitType::Gram => UnitPrice::Per100Grams(value),
            UnitType::Liter => UnitPrice::PerLiter(value),
        };

        Ok(Ingredient {
            id: record.id,
            name: record.name,
            price,
            tags: record.tags,
        })
    }
}

/// One (ingredient, amount) pair inside a dish; the amount's unit is implied
/// by the ingredient's unit type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishLineRecord {
    pub ingredient: IngredientRecord,
    pub amount: f64,
}

/// Dish as stored: ingredient lines plus the resolved tag set that was
/// derived when the ingredient set last changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishRecord {
    pub id: String,
    pub name: String,
    pub owner: String,
    #[serde(default)]
    pub ingredients: Vec<DishLineRecord>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct DishIngredientLine {
    pub ingredient: Ingredient,
    pub amount: f64,
}

#[derive(Debug, Clone)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub lines: Vec<DishIngredientLine>,
    pub tags: Vec<Tag>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Dish {
    /// Every tag carried by any ingredient of the dish, deduplicated. This is
    /// the candidate set fed to tag resolution.
    pub fn candidate_tags(&self) -> BTreeSet<Tag> {
        self.lines
            .iter()
            .flat_map(|line| line.ingredient.tags.iter().cloned())
            .collect()
    }
}

impl TryFrom<DishRecord> for Dish {
    type Error = DishError;

    fn try_from(record: DishRecord) -> Result<Self> {
        let mut lines = Vec::with_capacity(record.ingredients.len());
        for line in record.ingredients {
            validate_positive_amount(
                &format!("{}.amount", line.ingredient.name),
                line.amount,
            )?;
            lines.push(DishIngredientLine {
                ingredient: Ingredient::try_from(line.ingredient)?,
                amount: line.amount,
            });
        }

        Ok(Dish {
            id: record.id,
            name: record.name,
            owner: record.owner,
            lines,
            tags: record.tags,
            created_at: record.created_at,
        })
    }
}

/// One merged row of the selection summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostLine {
    pub ingredient_name: String,
    pub unit_type: UnitType,
    pub total_amount: f64,
    /// The raw quoted price for the ingredient's unit type; display rounding
    /// is the caller's concern.
    pub unit_price_display: f64,
    pub line_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSummary {
    pub lines: Vec<CostLine>,
    pub total_cost: f64,
}
