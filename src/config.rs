use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use log::warn;

use crate::error::ConfigError;

/// Data file name kept from the stand's original tooling
pub const DEFAULT_DATA_FILE: &str = "datos_hotdog_ccs.json";

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Upper bound (inclusive) of customers drawn per day
    pub max_customers: usize,
    /// Upper bound (inclusive) of products one customer picks
    pub max_picks: usize,
    /// Chance that a pick comes with an extra side
    pub extra_side_probability: f64,
    pub days: usize,
    /// Fixed seed for reproducible runs; entropy when unset
    pub seed: Option<u64>,
    pub data_file: PathBuf,
    /// Drive the stand from the terminal menu instead of simulating `days` in one go
    pub interactive: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_customers: 200,
            max_picks: 5,
            extra_side_probability: 0.5,
            days: 1,
            seed: None,
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            interactive: false,
        }
    }
}

impl SimulationConfig {
    /// Defaults overlaid with `HOTDOG_SEED`, `HOTDOG_DAYS`, `HOTDOG_DATA_FILE` and `HOTDOG_INTERACTIVE`
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(seed) = parse_var::<u64>("HOTDOG_SEED") {
            config.seed = Some(seed);
        }
        if let Some(days) = parse_var::<usize>("HOTDOG_DAYS") {
            config.days = days;
        }
        if let Ok(path) = env::var("HOTDOG_DATA_FILE") {
            config.data_file = PathBuf::from(path);
        }
        if let Some(interactive) = parse_var::<bool>("HOTDOG_INTERACTIVE") {
            config.interactive = interactive;
        }
        config
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.extra_side_probability) {
            return Err(ConfigError::ProbabilityOutOfRange(self.extra_side_probability));
        }
        if self.max_picks == 0 {
            return Err(ConfigError::NoPicks(self.max_picks));
        }
        Ok(())
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}={:?}: not a valid value", name, raw);
            None
        }
    }
}
