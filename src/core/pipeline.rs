use std::path::Path;

use crate::core::costs::aggregate_selection;
use crate::core::tags::TagRuleTable;
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::{Dish, DishRecord, SelectionSummary};
use crate::utils::error::{DishError, Result};

pub struct SummaryPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    rules: TagRuleTable,
}

impl<S: Storage, C: ConfigProvider> SummaryPipeline<S, C> {
    pub fn new(storage: S, config: C, rules: TagRuleTable) -> Self {
        Self {
            storage,
            config,
            rules,
        }
    }

    fn output_file(&self, filename: &str) -> String {
        Path::new(self.config.output_path())
            .join(filename)
            .to_string_lossy()
            .into_owned()
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for SummaryPipeline<S, C> {
    fn extract(&self) -> Result<Vec<Dish>> {
        tracing::debug!("Reading selection from: {}", self.config.selection_file());
        let raw = self.storage.read_file(self.config.selection_file())?;
        let records: Vec<DishRecord> = serde_json::from_slice(&raw)?;
        tracing::debug!("Parsed {} dish records", records.len());

        let mut dishes = Vec::with_capacity(records.len());
        for record in records {
            let mut dish = Dish::try_from(record)?;
            // Stored tag sets may predate an ingredient edit; re-derive.
            dish.tags = self.rules.resolve(dish.candidate_tags());
            dishes.push(dish);
        }
        Ok(dishes)
    }

    fn summarize(&self, dishes: Vec<Dish>) -> Result<SelectionSummary> {
        let summary = aggregate_selection(&dishes);
        tracing::debug!(
            "Merged {} dishes into {} ingredient lines",
            dishes.len(),
            summary.lines.len()
        );
        Ok(summary)
    }

    fn load(&self, summary: SelectionSummary) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for line in &summary.lines {
            writer.serialize(line)?;
        }
        writer.flush()?;
        let csv_data = writer
            .into_inner()
            .map_err(|e| DishError::ProcessingError {
                message: format!("CSV buffer error: {e}"),
            })?;

        // The JSON report carries the unrounded figures so display layers can
        // round however they like.
        let json_data = serde_json::to_vec_pretty(&summary)?;

        self.storage
            .write_file(&self.output_file("summary.csv"), &csv_data)?;
        self.storage
            .write_file(&self.output_file("summary.json"), &json_data)?;

        Ok(self.config.output_path().to_string())
    }
}
