pub mod defaults;

use crate::registry::Extension;
use defaults::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Found an issue loading the configuration file:\n\n{0}")]
    ErrLoadingConfig(String),
    #[error("Configuration file was not found")]
    PathNotFound,
    #[error("Configuration file already exists at {}", .0.display())]
    AlreadyExists(PathBuf),
    #[error("Could not write the configuration file {}: {message}", path.display())]
    ErrWritingConfig { path: PathBuf, message: String },
}

/// Where the GL library comes from when the loader opens it itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Library {
    #[serde(default = "default_search_paths", rename = "search-paths")]
    pub search_paths: Vec<PathBuf>,
    #[serde(
        default = "Option::default",
        rename = "get-proc-address",
        skip_serializing_if = "Option::is_none"
    )]
    pub get_proc_address: Option<String>,
}

impl Library {
    /// Override of the platform lookup symbol, ignoring empty strings.
    pub fn get_proc_address(&self) -> Option<&str> {
        self.get_proc_address
            .as_deref()
            .filter(|symbol| !symbol.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Extensions {
    #[serde(default = "Vec::default")]
    pub disabled: Vec<String>,
    #[serde(default = "bool::default", rename = "prefer-combined-string")]
    pub prefer_combined_string: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Developer {
    #[serde(default = "default_log_level", rename = "log-level")]
    pub log_level: String,
}

impl Default for Developer {
    fn default() -> Developer {
        Developer {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default = "Library::default")]
    pub library: Library,
    #[serde(default = "Extensions::default")]
    pub extensions: Extensions,
    #[serde(default = "Developer::default")]
    pub developer: Developer,
}

#[cfg(not(target_os = "windows"))]
#[inline]
pub fn config_dir_path() -> PathBuf {
    let home_dir = dirs::home_dir().unwrap_or_default();
    home_dir.join(".config").join("glbind")
}

#[cfg(target_os = "windows")]
#[inline]
pub fn config_dir_path() -> PathBuf {
    let home_dir = dirs::home_dir().unwrap_or_default();
    home_dir.join("AppData").join("Local").join("glbind")
}

#[inline]
pub fn config_file_path() -> PathBuf {
    config_dir_path().join("glbind.toml")
}

#[inline]
pub fn config_file_content() -> String {
    default_config_file_content()
}

/// Writes the commented default configuration to `path`, or to
/// [`config_file_path`] when `None`, creating missing parent directories.
/// An existing file is never touched.
pub fn create_config_file(path: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    let target = path.unwrap_or_else(config_file_path);
    if target.exists() {
        return Err(ConfigError::AlreadyExists(target));
    }

    let write_error = |err: std::io::Error| ConfigError::ErrWritingConfig {
        path: target.clone(),
        message: err.to_string(),
    };
    if let Some(parent) = target.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }
    std::fs::write(&target, config_file_content()).map_err(write_error)?;

    info!("configuration file created {}", target.display());
    Ok(target)
}

impl Config {
    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str::<Config>(content)
            .map_err(|err_message| ConfigError::ErrLoadingConfig(err_message.to_string()))
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::PathNotFound);
        }
        match std::fs::read_to_string(path) {
            Ok(content) => Config::load_from_str(&content),
            Err(err_message) => Err(ConfigError::ErrLoadingConfig(err_message.to_string())),
        }
    }

    /// Reads the configuration file, falling back to defaults on any problem.
    pub fn load() -> Self {
        match Config::try_load() {
            Ok(config) => config,
            Err(ConfigError::PathNotFound) => Config::default(),
            Err(err_message) => {
                warn!("failure to parse config file, falling back to default...\n{err_message}");
                Config::default()
            }
        }
    }

    pub fn try_load() -> Result<Self, ConfigError> {
        Config::load_from_path(&config_file_path())
    }

    pub fn to_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Registry extensions named in `extensions.disabled`. Names the
    /// registry does not know are reported and skipped.
    pub fn disabled_extensions(&self) -> Vec<Extension> {
        self.extensions
            .disabled
            .iter()
            .filter_map(|name| {
                let extension = Extension::from_name(name);
                if extension.is_none() {
                    warn!("ignoring unknown extension in configuration: {name}");
                }
                extension
            })
            .collect()
    }
}
