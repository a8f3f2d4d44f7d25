use crate::domain::model::{Dish, SelectionSummary};
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn selection_file(&self) -> &str;
    fn rules_file(&self) -> Option<&str>;
    fn output_path(&self) -> &str;
}

/// The three stages of a selection-summary run.
pub trait Pipeline: Send + Sync {
    fn extract(&self) -> Result<Vec<Dish>>;
    fn summarize(&self, dishes: Vec<Dish>) -> Result<SelectionSummary>;
    fn load(&self, summary: SelectionSummary) -> Result<String>;
}
