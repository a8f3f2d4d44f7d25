pub mod costs;
pub mod engine;
pub mod pipeline;
pub mod tags;

pub use crate::domain::model::{CostLine, Dish, DishRecord, Ingredient, SelectionSummary};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
