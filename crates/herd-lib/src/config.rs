//! Generator configuration

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_DAY_WINDOW, DEFAULT_POPULATION_SIZE};

/// Errors raised while validating a [`GeneratorConfig`]
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be within [0, 1], got {value}")]
    RateOutOfRange { field: &'static str, value: f64 },
}

/// Tunable parameters of a generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of animals to generate
    #[serde(default = "default_population_size")]
    pub population_size: usize,

    /// Days of activity history and trend buckets
    #[serde(default = "default_day_window")]
    pub day_window: u32,

    /// Probability that an animal is pregnant
    #[serde(default = "default_pregnancy_rate")]
    pub pregnancy_rate: f64,

    /// Share of the herd (taken as a prefix) that receives an alert
    #[serde(default = "default_alert_coverage")]
    pub alert_coverage: f64,

    /// Probability that a generated alert is already resolved
    #[serde(default = "default_alert_resolved_rate")]
    pub alert_resolved_rate: f64,

    /// Length of the live activity feed
    #[serde(default = "default_realtime_feed_len")]
    pub realtime_feed_len: usize,

    /// Seed for the random source; drawn from entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Generation time; the wall clock when absent
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
}

fn default_population_size() -> usize {
    DEFAULT_POPULATION_SIZE
}

fn default_day_window() -> u32 {
    DEFAULT_DAY_WINDOW
}

fn default_pregnancy_rate() -> f64 {
    0.65
}

fn default_alert_coverage() -> f64 {
    0.3
}

fn default_alert_resolved_rate() -> f64 {
    0.4
}

fn default_realtime_feed_len() -> usize {
    20
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            population_size: default_population_size(),
            day_window: default_day_window(),
            pregnancy_rate: default_pregnancy_rate(),
            alert_coverage: default_alert_coverage(),
            alert_resolved_rate: default_alert_resolved_rate(),
            realtime_feed_len: default_realtime_feed_len(),
            seed: None,
            now: None,
        }
    }
}

impl GeneratorConfig {
    pub fn with_population(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    pub fn with_day_window(mut self, day_window: u32) -> Self {
        self.day_window = day_window;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Pin the generation time
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    /// Check that every probability lies in [0, 1]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rates = [
            ("pregnancy_rate", self.pregnancy_rate),
            ("alert_coverage", self.alert_coverage),
            ("alert_resolved_rate", self.alert_resolved_rate),
        ];
        for (field, value) in rates {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::RateOutOfRange { field, value });
            }
        }
        Ok(())
    }
}
