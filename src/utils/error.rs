use crate::domain::model::UnitType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DishError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Rule table parse error: {0}")]
    RuleTableError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Malformed ingredient '{name}': unit type '{unit_type}' requires a numeric {price_field}")]
    MalformedIngredientError {
        name: String,
        unit_type: UnitType,
        price_field: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, DishError>;
