use crate::core::SettingsProvider;
use crate::utils::error::{CostingError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{DEFAULT_CURRENCY, DEFAULT_INVENTORY_PATH};

/// Optional settings file. Every key may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub inventory: InventorySection,
    #[serde(default)]
    pub display: DisplaySection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventorySection {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplaySection {
    pub currency: Option<String>,
    pub pause_on_exit: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CostingError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CostingError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${STOCK_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CostingError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl SettingsProvider for TomlConfig {
    fn inventory_path(&self) -> &str {
        self.inventory.path.as_deref().unwrap_or(DEFAULT_INVENTORY_PATH)
    }

    fn currency(&self) -> &str {
        self.display.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
    }

    fn pause_on_exit(&self) -> bool {
        self.display.pause_on_exit.unwrap_or(true)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        crate::utils::validation::validate_path("inventory.path", self.inventory_path())?;
        crate::utils::validation::validate_non_empty_string("display.currency", self.currency())?;
        Ok(())
    }
}
