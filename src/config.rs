//! Configuration.
//!
//! Read from environment variables, each with a default:
//! - `TASKDECK_DATA_DIR` - directory for file-backed storage (unset: in-memory)
//! - `TASKDECK_TASKS_KEY` - storage key of the task list
//! - `TASKDECK_THEME_KEY` - storage key of the theme preference
//! - `TASKDECK_SEED_ON_FIRST_RUN` - seed onboarding tasks when storage is empty
//! - `TASKDECK_LOG_LEVEL` - fallback log level when `RUST_LOG` is unset

use anyhow::{Context, Result};
use std::path::PathBuf;
use thiserror::Error;

use crate::storage::{FileStorage, MemoryStorage, SharedStorage};

pub const DEFAULT_TASKS_KEY: &str = "react_todo_list";
pub const DEFAULT_THEME_KEY: &str = "todo_theme";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{name} must be a boolean (true/false/1/0/yes/no), got '{value}'")]
    InvalidBool { name: &'static str, value: String },

    #[error("{name} must not be empty")]
    Empty { name: &'static str },
}

/// Storage keys and first-run behaviour of a task board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskBoardConfig {
    pub tasks_key: String,
    pub theme_key: String,
    pub seed_on_first_run: bool,
}

impl Default for TaskBoardConfig {
    fn default() -> Self {
        Self {
            tasks_key: DEFAULT_TASKS_KEY.to_string(),
            theme_key: DEFAULT_THEME_KEY.to_string(),
            seed_on_first_run: true,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where file-backed storage lives. `None` keeps everything in memory.
    pub data_dir: Option<PathBuf>,
    pub board: TaskBoardConfig,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            board: TaskBoardConfig::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let data_dir = lookup("TASKDECK_DATA_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let tasks_key = non_empty(&lookup, "TASKDECK_TASKS_KEY")?
            .unwrap_or(defaults.board.tasks_key);
        let theme_key = non_empty(&lookup, "TASKDECK_THEME_KEY")?
            .unwrap_or(defaults.board.theme_key);

        let seed_on_first_run = match lookup("TASKDECK_SEED_ON_FIRST_RUN") {
            Some(value) => parse_bool("TASKDECK_SEED_ON_FIRST_RUN", &value)?,
            None => defaults.board.seed_on_first_run,
        };

        let log_level = lookup("TASKDECK_LOG_LEVEL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.log_level);

        Ok(Self {
            data_dir,
            board: TaskBoardConfig {
                tasks_key,
                theme_key,
                seed_on_first_run,
            },
            log_level,
        })
    }

    /// Build the storage backend this configuration points at.
    pub fn open_storage(&self) -> Result<SharedStorage> {
        match &self.data_dir {
            Some(dir) => {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create data directory {}", dir.display()))?;
                tracing::info!("Using file storage at {}", dir.display());
                Ok(FileStorage::new(dir.clone()).shared())
            }
            None => {
                tracing::info!("No data directory configured, using in-memory storage");
                Ok(MemoryStorage::new().shared())
            }
        }
    }
}

fn non_empty<F>(lookup: &F, name: &'static str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if value.trim().is_empty() => Err(ConfigError::Empty { name }),
        Some(value) => Ok(Some(value.trim().to_string())),
        None => Ok(None),
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            name,
            value: value.to_string(),
        }),
    }
}
