use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::tags::{TagRule, TagRuleTable};
use crate::utils::error::{DishError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};

/// Tag-rule table as loaded from TOML:
///
/// ```toml
/// [[rules]]
/// tag = "meat"
/// conflicts = ["vegan", "vegetarian"]
/// priority = 1
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    pub rules: Vec<TagRule>,
}

impl RulesConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> Result<Self> {
        let config: RulesConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn into_table(self) -> Result<TagRuleTable> {
        TagRuleTable::new(self.rules)
    }
}

impl Validate for RulesConfig {
    fn validate(&self) -> Result<()> {
        if self.rules.is_empty() {
            return Err(DishError::ConfigError {
                message: "Rule table is empty".to_string(),
            });
        }
        for rule in &self.rules {
            validate_non_empty_string("rules.tag", rule.tag.as_str())?;
            if rule.conflicts.contains(&rule.tag) {
                return Err(DishError::ConfigError {
                    message: format!("Tag '{}' lists itself as a conflict", rule.tag),
                });
            }
        }
        Ok(())
    }
}
