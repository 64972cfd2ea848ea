//! Config command implementation.
//!
//! Manages CLI configuration settings.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::OutputFormat;
use crate::output::{
    print_header, print_info, print_json, print_output, print_success, print_warning, KeyValue,
};
use crate::settings::{ConfigKey, ConfigStore, Settings};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Get a configuration value
    Get(GetArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// List available configuration keys
    List,

    /// Reset configuration to defaults
    Reset(ResetArgs),

    /// Show configuration file location
    Path,
}

/// Arguments for get subcommand.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration key
    pub key: String,
}

/// Arguments for set subcommand.
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key
    pub key: String,

    /// Configuration value
    pub value: String,
}

/// Arguments for reset subcommand.
#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Reset all settings (not just one)
    #[arg(long)]
    pub all: bool,

    /// Specific key to reset (optional)
    pub key: Option<String>,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, path: &Path, settings: &Settings) -> Result<()> {
    match args.command {
        ConfigCommand::Show => execute_show(path, settings.format),
        ConfigCommand::Get(get_args) => execute_get(get_args, path, settings.format),
        ConfigCommand::Set(set_args) => execute_set(set_args, path),
        ConfigCommand::List => execute_list(settings.format),
        ConfigCommand::Reset(reset_args) => execute_reset(reset_args, path),
        ConfigCommand::Path => execute_path(path),
    }
}

/// Show current configuration.
fn execute_show(path: &Path, format: OutputFormat) -> Result<()> {
    let store = ConfigStore::load(path)?;

    match format {
        OutputFormat::Json => {
            let output: BTreeMap<_, _> = ConfigKey::all()
                .iter()
                .map(|key| (key.as_str(), store.get_or_default(*key)))
                .collect();
            print_json(&output)?;
        }
        OutputFormat::Minimal => {
            for key in ConfigKey::all() {
                println!("{}={}", key.as_str(), store.get_or_default(*key));
            }
        }
        OutputFormat::Table | OutputFormat::Csv => {
            let results: Vec<_> = ConfigKey::all()
                .iter()
                .map(|key| KeyValue::new(key.as_str(), store.get_or_default(*key)))
                .collect();
            if format == OutputFormat::Table {
                print_header("Current Configuration");
            }
            print_output(&results, format)?;
        }
    }

    Ok(())
}

/// Get a configuration value.
fn execute_get(args: GetArgs, path: &Path, format: OutputFormat) -> Result<()> {
    let key: ConfigKey = args.key.parse()?;
    let store = ConfigStore::load(path)?;
    let value = store.get_or_default(key);

    match format {
        OutputFormat::Table | OutputFormat::Csv => println!("{}: {}", key.as_str(), value),
        OutputFormat::Json => print_json(&serde_json::json!({
            "key": key.as_str(),
            "value": value
        }))?,
        OutputFormat::Minimal => println!("{value}"),
    }

    Ok(())
}

/// Set a configuration value.
fn execute_set(args: SetArgs, path: &Path) -> Result<()> {
    let key: ConfigKey = args.key.parse()?;

    let mut store = ConfigStore::load(path)?;
    let value = store.set(key, &args.value)?;
    store.save(path)?;

    tracing::info!(key = key.as_str(), %value, "configuration updated");
    print_success(&format!("Set {} = {}", key.as_str(), value));
    Ok(())
}

/// List available configuration keys.
fn execute_list(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let output: Vec<_> = ConfigKey::all()
                .iter()
                .map(|key| {
                    serde_json::json!({
                        "key": key.as_str(),
                        "description": key.description(),
                        "default": key.default_value()
                    })
                })
                .collect();
            print_json(&output)?;
        }
        OutputFormat::Minimal => {
            for key in ConfigKey::all() {
                println!("{}", key.as_str());
            }
        }
        OutputFormat::Table | OutputFormat::Csv => {
            let results: Vec<_> = ConfigKey::all()
                .iter()
                .map(|key| {
                    KeyValue::new(
                        key.as_str(),
                        format!("{} (default: {})", key.description(), key.default_value()),
                    )
                })
                .collect();
            if format == OutputFormat::Table {
                print_header("Available Configuration Keys");
            }
            print_output(&results, format)?;
        }
    }

    Ok(())
}

/// Reset configuration.
fn execute_reset(args: ResetArgs, path: &Path) -> Result<()> {
    let mut store = ConfigStore::load(path)?;

    if args.all {
        store.clear();
        store.save(path)?;
        print_success("Reset all configuration to defaults");
    } else if let Some(key_str) = args.key {
        let key: ConfigKey = key_str.parse()?;
        store.remove(key);
        store.save(path)?;
        print_success(&format!(
            "Reset {} to default ({})",
            key.as_str(),
            key.default_value()
        ));
    } else {
        print_warning("Use --all to reset all settings, or specify a key to reset");
    }

    Ok(())
}

/// Show configuration file path.
fn execute_path(path: &Path) -> Result<()> {
    print_info(&format!("Config file: {}", path.display()));
    if path.exists() {
        print_info("Status: exists");
    } else {
        print_info("Status: not created yet (using defaults)");
    }
    Ok(())
}
