pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{cli::LocalStorage, CliConfig};

pub use crate::config::rules::RulesConfig;
pub use crate::core::costs::{aggregate_selection, summarize_selection};
pub use crate::core::tags::{TagRule, TagRuleTable};
pub use crate::core::{engine::SummaryEngine, pipeline::SummaryPipeline};
pub use crate::domain::model::{
    CostLine, Dish, DishIngredientLine, DishLineRecord, DishRecord, Ingredient, IngredientRecord,
    SelectionSummary, Tag, UnitPrice, UnitType,
};
pub use crate::utils::error::{DishError, Result};
