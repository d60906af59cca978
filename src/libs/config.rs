//! Configuration management for the kaglo application.
//!
//! Settings live in a JSON file inside the platform data directory. The only
//! configurable module today is the sync server connection; the interactive
//! wizard (`Config::init`) walks through module selection the same way the
//! config is expected to grow.

use crate::api::remote::RemoteConfig;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable module shown in the init wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote: Option<RemoteConfig>,
}

impl Config {
    /// Reads the configuration file, returning defaults when it is missing.
    pub fn read() -> Result<Self> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME).map_err(|e| anyhow::anyhow!(e.to_string()))?;
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(&config_path)?;
        serde_json::from_str(&contents).map_err(|_| msg_error_anyhow!(Message::ConfigParseError))
    }

    /// Writes the configuration to the data directory.
    pub fn save(&self) -> Result<()> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME).map_err(|e| anyhow::anyhow!(e.to_string()))?;
        let file = File::create(config_path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Starts from the existing configuration so re-running `init` keeps
    /// previous answers as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Config::read().unwrap_or_default();
        let modules = vec![RemoteConfig::module()];

        msg_print!("Select modules to configure");
        let selection = MultiSelect::with_theme(&ColorfulTheme::default())
            .items(&modules.iter().map(|m| m.name.clone()).collect::<Vec<_>>())
            .interact()?;

        for index in selection {
            match modules[index].key.as_str() {
                "remote" => config.remote = Some(RemoteConfig::init(&config.remote)?),
                _ => {}
            }
        }

        Ok(config)
    }
}
