use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Minimum matched-phrase length used by the word aligner
    #[serde(default = "default_min_phrase_length")]
    pub min_phrase_length: usize,

    /// Reading speed used for the minimum title duration heuristic,
    /// in characters per second
    #[serde(default = "default_chars_per_second")]
    pub chars_per_second: f64,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            min_phrase_length: default_min_phrase_length(),
            chars_per_second: default_chars_per_second(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.min_phrase_length == 0 {
            return Err(anyhow!("min_phrase_length must be at least 1"));
        }

        if !self.chars_per_second.is_finite() || self.chars_per_second <= 0.0 {
            return Err(anyhow!(
                "chars_per_second must be a positive number, got {}",
                self.chars_per_second
            ));
        }

        Ok(())
    }
}

fn default_min_phrase_length() -> usize {
    3
}

fn default_chars_per_second() -> f64 {
    15.0
}

/// Log level for the application
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}
