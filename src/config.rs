use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, StrBumpError};

/// Represents the complete configuration for str-bump.
///
/// Contains stepping behavior, output formatting, and range expansion options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub behavior: BehaviorConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub range: RangeConfig,
}

/// Returns the default number of steps applied per input.
fn default_count() -> u32 {
    1
}

/// Returns the default for prompting before oversized range expansions.
fn default_confirm_large_expansions() -> bool {
    true
}

/// Returns the default range expansion limit.
fn default_max_items() -> usize {
    1000
}

/// Configuration for stepping behavior.
///
/// Controls how many increment/decrement steps are applied per input and
/// whether oversized range expansions require confirmation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BehaviorConfig {
    #[serde(default = "default_count")]
    pub count: u32,

    #[serde(default = "default_confirm_large_expansions")]
    pub confirm_large_expansions: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            count: default_count(),
            confirm_large_expansions: default_confirm_large_expansions(),
        }
    }
}

/// Configuration for output formatting.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub plain: bool,

    #[serde(default)]
    pub show_steps: bool,
}

/// Configuration for range expansion.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RangeConfig {
    #[serde(default = "default_max_items")]
    pub max_items: usize,
}

impl Default for RangeConfig {
    fn default() -> Self {
        RangeConfig {
            max_items: default_max_items(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `strbump.toml` in current directory
/// 3. `~/.config/.strbump.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./strbump.toml").exists() {
        fs::read_to_string("./strbump.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".strbump.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| StrBumpError::config(format!("invalid configuration: {}", e)))?;
    Ok(config)
}
