pub mod cli;
pub mod rules;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "dishly")]
#[command(about = "Dish management core: tag resolution and selection cost summaries")]
pub struct CliConfig {
    /// JSON file holding the selected dishes.
    #[arg(long, default_value = "selection.json")]
    pub selection_file: String,

    /// TOML tag-rule table; the built-in dietary table is used when omitted.
    #[arg(long)]
    pub rules_file: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Print the tag vocabulary in rule-table order and exit.
    #[arg(long)]
    pub list_tags: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn selection_file(&self) -> &str {
        &self.selection_file
    }

    fn rules_file(&self) -> Option<&str> {
        self.rules_file.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("selection_file", &self.selection_file)?;
        validate_file_extension("selection_file", &self.selection_file, &["json"])?;
        if let Some(rules_file) = &self.rules_file {
            validate_file_extension("rules_file", rules_file, &["toml"])?;
        }
        validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}
