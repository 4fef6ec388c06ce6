//! Configuration management for the scheduler.
//!
//! Settings are kept as pretty-printed JSON in the per-user data directory
//! and grouped into optional modules, so a missing module simply falls back
//! to its defaults.
//!
//! ## Modules
//!
//! - **Storage**: database file name (relative to the data directory) or an absolute path
//! - **List**: maximum number of rows returned when listing due tasks
//!
//! ## Environment Overrides
//!
//! Values from the file can be overridden through the environment (a `.env`
//! file is loaded at startup):
//!
//! - `SCHEDULER_DBFILE`: database file
//! - `SCHEDULER_MAX_TASKS`: listing bound
//!
//! ## Usage
//!
//! ```rust,no_run
//! use scheduler::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("database: {}", config.db_file());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Database file used when nothing else is configured.
pub const DEFAULT_DB_FILE: &str = "scheduler.db";

/// Default bound for due task listings.
pub const DEFAULT_MAX_TASKS: usize = 10;

pub const ENV_DB_FILE: &str = "SCHEDULER_DBFILE";
pub const ENV_MAX_TASKS: &str = "SCHEDULER_MAX_TASKS";

/// A configurable module shown by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StorageConfig {
    /// Database file name or absolute path.
    pub db_file: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ListConfig {
    /// Maximum number of tasks returned by a due listing.
    pub max_tasks: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            db_file: DEFAULT_DB_FILE.to_string(),
        }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        ListConfig {
            max_tasks: DEFAULT_MAX_TASKS,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<ListConfig>,
}

impl Config {
    /// Loads the configuration file, or the defaults if it does not exist yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Effective database file: environment first, then the file, then the default.
    pub fn db_file(&self) -> String {
        match env::var(ENV_DB_FILE) {
            Ok(path) if !path.trim().is_empty() => path,
            _ => self.storage.clone().unwrap_or_default().db_file,
        }
    }

    /// Effective listing bound, never zero.
    pub fn max_tasks(&self) -> usize {
        let max_tasks = env::var(ENV_MAX_TASKS)
            .ok()
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or_else(|| self.list.clone().unwrap_or_default().max_tasks);
        max_tasks.max(1)
    }

    /// Interactive setup wizard seeded with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "storage".to_string(),
                name: "Storage".to_string(),
            },
            ConfigModule {
                key: "list".to_string(),
                name: "List".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "storage" => {
                    let default = config.storage.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleStorage);
                    config.storage = Some(StorageConfig {
                        db_file: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDbFile.to_string())
                            .default(default.db_file)
                            .interact_text()?,
                    });
                }
                "list" => {
                    let default = config.list.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleList);
                    config.list = Some(ListConfig {
                        max_tasks: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptMaxTasks.to_string())
                            .default(default.max_tasks)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
