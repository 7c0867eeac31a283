pub mod toml_config;

use crate::core::SettingsProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

pub const DEFAULT_INVENTORY_PATH: &str = "sklad.json";
pub const DEFAULT_CURRENCY: &str = "Kč";

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "stock-costing")]
#[command(about = "Compare FIFO and LIFO costs of an order against dated stock batches")]
pub struct CliConfig {
    /// Inventory JSON file [default: sklad.json]
    #[arg(long)]
    pub inventory: Option<String>,

    /// Optional TOML settings file
    #[arg(long)]
    pub config: Option<String>,

    /// Currency label printed after amounts [default: Kč]
    #[arg(long)]
    pub currency: Option<String>,

    #[arg(long, help = "Do not wait for Enter after the recap")]
    pub no_pause: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

/// Values the session runs with after flags, settings file and defaults are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub inventory_path: String,
    pub currency: String,
    pub pause_on_exit: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            inventory_path: DEFAULT_INVENTORY_PATH.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            pause_on_exit: true,
        }
    }
}

impl Settings {
    /// Command line flags win over the settings file, which wins over defaults.
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                validation::validate_file_extension("config", path, &["toml"])?;
                tracing::debug!("Reading settings from {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };
        Ok(Self::merge(cli, &file))
    }

    pub fn merge(cli: &CliConfig, file: &TomlConfig) -> Self {
        Self {
            inventory_path: cli
                .inventory
                .clone()
                .unwrap_or_else(|| file.inventory_path().to_string()),
            currency: cli
                .currency
                .clone()
                .unwrap_or_else(|| file.currency().to_string()),
            pause_on_exit: !cli.no_pause && file.pause_on_exit(),
        }
    }
}

impl SettingsProvider for Settings {
    fn inventory_path(&self) -> &str {
        &self.inventory_path
    }

    fn currency(&self) -> &str {
        &self.currency
    }

    fn pause_on_exit(&self) -> bool {
        self.pause_on_exit
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("inventory", &self.inventory_path)?;
        validation::validate_non_empty_string("currency", &self.currency)?;
        Ok(())
    }
}
