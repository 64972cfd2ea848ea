//! Persistent CLI settings.
//!
//! Settings live in a flat JSON object at `<config_dir>/folio/config.json`.
//! Missing keys fall back to their defaults; stored values are validated both
//! when set and when loaded.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::ValueEnum;
use folio_analytics::AnalyticsConfig;
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// CLI configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    /// Default output format
    DefaultFormat,
    /// Bars shown by the history command
    DisplayLimit,
    /// Holding count that switches on parallel evaluation
    ParallelThreshold,
    /// Decimal places for table output
    DecimalPrecision,
    /// Currency assumed when a record carries none
    DefaultCurrency,
    /// Whether to use colors
    UseColors,
}

impl ConfigKey {
    /// Returns the key as stored in the config file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DefaultFormat => "default_format",
            Self::DisplayLimit => "display_limit",
            Self::ParallelThreshold => "parallel_threshold",
            Self::DecimalPrecision => "decimal_precision",
            Self::DefaultCurrency => "default_currency",
            Self::UseColors => "use_colors",
        }
    }

    /// Returns a one-line description with the accepted values.
    pub fn description(&self) -> &'static str {
        match self {
            Self::DefaultFormat => "Default output format (table, json, csv, minimal)",
            Self::DisplayLimit => "Price bars shown by `folio history` (1-1000)",
            Self::ParallelThreshold => "Holdings needed before evaluating in parallel (1+)",
            Self::DecimalPrecision => "Number of decimal places for table output (0-10)",
            Self::DefaultCurrency => "Currency for records without one (3-letter code)",
            Self::UseColors => "Enable colored output (true, false)",
        }
    }

    /// Returns the value used when the key is not set.
    pub fn default_value(&self) -> &'static str {
        match self {
            Self::DefaultFormat => "table",
            Self::DisplayLimit => "50",
            Self::ParallelThreshold => "100",
            Self::DecimalPrecision => "2",
            Self::DefaultCurrency => "USD",
            Self::UseColors => "true",
        }
    }

    /// All keys in display order.
    pub fn all() -> &'static [Self] {
        &[
            Self::DefaultFormat,
            Self::DisplayLimit,
            Self::ParallelThreshold,
            Self::DecimalPrecision,
            Self::DefaultCurrency,
            Self::UseColors,
        ]
    }

    /// Checks a value for this key, returning its normalized form.
    pub fn normalize(&self, value: &str) -> CliResult<String> {
        let invalid = |reason: String| CliError::InvalidConfigValue {
            key: self.as_str(),
            reason,
        };
        let value = value.trim();

        match self {
            Self::DefaultFormat => OutputFormat::from_str(value, true)
                .map(|_| value.to_lowercase())
                .map_err(|_| invalid(format!("{value}. Use table, json, csv, or minimal."))),
            Self::DisplayLimit => match value.parse::<usize>() {
                Ok(n) if (1..=1000).contains(&n) => Ok(n.to_string()),
                _ => Err(invalid(format!("{value}. Must be between 1 and 1000."))),
            },
            Self::ParallelThreshold => match value.parse::<usize>() {
                Ok(n) if n >= 1 => Ok(n.to_string()),
                _ => Err(invalid(format!("{value}. Must be a positive number."))),
            },
            Self::DecimalPrecision => match value.parse::<u32>() {
                Ok(n) if n <= 10 => Ok(n.to_string()),
                _ => Err(invalid(format!("{value}. Must be between 0 and 10."))),
            },
            Self::DefaultCurrency => {
                if value.len() == 3 && value.chars().all(|c| c.is_ascii_alphabetic()) {
                    Ok(value.to_uppercase())
                } else {
                    Err(invalid(format!("{value}. Use a 3-letter code such as USD.")))
                }
            }
            Self::UseColors => match value.to_lowercase().as_str() {
                "true" | "1" | "yes" => Ok("true".to_string()),
                "false" | "0" | "no" => Ok("false".to_string()),
                _ => Err(invalid(format!("{value}. Use true or false."))),
            },
        }
    }
}

impl FromStr for ConfigKey {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default_format" | "format" => Ok(Self::DefaultFormat),
            "display_limit" | "limit" => Ok(Self::DisplayLimit),
            "parallel_threshold" | "threshold" => Ok(Self::ParallelThreshold),
            "decimal_precision" | "precision" => Ok(Self::DecimalPrecision),
            "default_currency" | "currency" => Ok(Self::DefaultCurrency),
            "use_colors" | "colors" => Ok(Self::UseColors),
            _ => Err(CliError::UnknownConfigKey(s.to_string())),
        }
    }
}

/// The config file contents.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigStore {
    #[serde(flatten)]
    values: BTreeMap<String, String>,
}

impl ConfigStore {
    /// Loads the store, or an empty one if the file does not exist.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))
    }

    /// Writes the store, creating parent directories.
    pub fn save(&self, path: &Path) -> CliResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| CliError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the stored value, if set.
    pub fn get(&self, key: ConfigKey) -> Option<&str> {
        self.values.get(key.as_str()).map(String::as_str)
    }

    /// Returns the stored value or the key's default.
    pub fn get_or_default(&self, key: ConfigKey) -> &str {
        self.get(key).unwrap_or(key.default_value())
    }

    /// Validates and stores a value.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> CliResult<String> {
        let normalized = key.normalize(value)?;
        self.values
            .insert(key.as_str().to_string(), normalized.clone());
        Ok(normalized)
    }

    /// Removes a stored value.
    pub fn remove(&mut self, key: ConfigKey) {
        self.values.remove(key.as_str());
    }

    /// Removes every stored value.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Returns the effective value of `key`, validated.
    fn effective(&self, key: ConfigKey) -> CliResult<String> {
        key.normalize(self.get_or_default(key))
    }
}

/// Resolves the config file path.
///
/// An explicit directory (from `--config-dir` or `FOLIO_CONFIG_DIR`) wins over
/// the platform config directory.
pub fn config_path(dir_override: Option<&Path>) -> CliResult<PathBuf> {
    if let Some(dir) = dir_override {
        return Ok(dir.join("config.json"));
    }
    let base = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| CliError::Config("Could not determine config directory".to_string()))?;
    Ok(base.join("folio").join("config.json"))
}

/// Effective settings for one invocation: stored config plus flags.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Output format.
    pub format: OutputFormat,
    /// Decimal places for table output.
    pub precision: u32,
    /// Whether colored output is enabled.
    pub use_colors: bool,
    /// Suppress headers and notices.
    pub quiet: bool,
    /// Analytics configuration.
    pub analytics: AnalyticsConfig,
}

impl Settings {
    /// Builds settings from the store, letting an explicit format flag win.
    pub fn resolve(
        store: &ConfigStore,
        format_flag: Option<OutputFormat>,
        quiet: bool,
    ) -> CliResult<Self> {
        let format = match format_flag {
            Some(f) => f,
            None => {
                let stored = store.effective(ConfigKey::DefaultFormat)?;
                OutputFormat::from_str(&stored, true).map_err(CliError::Config)?
            }
        };

        let parse_usize = |key: ConfigKey| -> CliResult<usize> {
            store
                .effective(key)?
                .parse()
                .map_err(|_| CliError::Config(format!("{} is not a number", key.as_str())))
        };

        let precision = parse_usize(ConfigKey::DecimalPrecision)? as u32;
        let analytics = AnalyticsConfig::default()
            .with_display_limit(parse_usize(ConfigKey::DisplayLimit)?)
            .with_threshold(parse_usize(ConfigKey::ParallelThreshold)?)
            .with_default_currency(store.effective(ConfigKey::DefaultCurrency)?);

        Ok(Self {
            format,
            precision,
            use_colors: store.effective(ConfigKey::UseColors)? == "true",
            quiet,
            analytics,
        })
    }

    /// Returns true when decorative table output should be printed.
    pub fn decorated(&self) -> bool {
        self.format == OutputFormat::Table && !self.quiet
    }
}
