//! Configuration management for the registry console

use crate::principal::BURN_ADDRESS;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub console: ConsoleConfig,
}

#[derive(Debug, Deserialize)]
pub struct RegistryConfig {
    #[serde(default = "default_contract_admin")]
    pub contract_admin: String,
}

#[derive(Debug, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default = "default_colored_output")]
    pub colored_output: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        RegistryConfig {
            contract_admin: default_contract_admin(),
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            colored_output: default_colored_output(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if path.exists() {
        fs::read_to_string(path)?
    } else {
        String::new()
    };

    let config: Config = if config_str.is_empty() {
        // Sane defaults when the config file is absent
        Config {
            registry: RegistryConfig::default(),
            console: ConsoleConfig::default(),
        }
    } else {
        toml::from_str(&config_str)?
    };

    // Validate critical values
    if config.registry.contract_admin.is_empty() {
        return Err("registry.contract_admin must be set in the config file".into());
    }

    if config.registry.contract_admin == BURN_ADDRESS {
        return Err("registry.contract_admin cannot be the burn address".into());
    }

    Ok(config)
}

fn default_contract_admin() -> String {
    "STADMIN".to_string()
}

fn default_colored_output() -> bool {
    true
}
