/// Error types for the stand simulation
/// Customer stockouts are simulated outcomes, not errors, and never appear here

use thiserror::Error;

use crate::models::Category;

/// Failures that abort a simulation run before any customer is served
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("cannot simulate a day with an empty menu")]
    EmptyCatalog,

    #[error("invalid simulation config: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("extra side probability {0} is out of range [0.0, 1.0]")]
    ProbabilityOutOfRange(f64),

    #[error("max_picks must be at least 1, got {0}")]
    NoPicks(usize),
}

#[derive(Debug, Error, PartialEq)]
pub enum InventoryError {
    #[error("component '{0}' already exists")]
    DuplicateComponent(String),

    #[error("component '{0}' not found")]
    UnknownComponent(String),

    #[error("not enough '{name}': {available} available, {requested} requested")]
    Insufficient {
        name: String,
        available: u32,
        requested: u32,
    },

    #[error("stock of '{name}' would drop below zero ({current} + {delta})")]
    NegativeStock {
        name: String,
        current: u32,
        delta: i64,
    },

    #[error("stock of '{name}' would exceed {max} ({current} + {delta})", max = u32::MAX)]
    StockOverflow {
        name: String,
        current: u32,
        delta: i64,
    },

    #[error("unknown category '{0}'")]
    UnknownCategory(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("product '{0}' already exists")]
    DuplicateProduct(String),

    #[error("product '{0}' not found")]
    UnknownProduct(String),

    #[error("product '{product}' references unknown component '{component}'")]
    UnknownComponent { product: String, component: String },

    #[error("'{component}' is a {actual}, expected a {expected}")]
    WrongCategory {
        component: String,
        expected: Category,
        actual: Category,
    },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("data file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("data file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
