//! Configuration data structures for [Torrust Tracker Status](https://docs.rs/torrust-tracker-status).
//!
//! This module contains the configuration data structures for the
//! Torrust Tracker Status library, which reduces the state of the local
//! endpoints announcing to a `BitTorrent` tracker into one tracker status.
//!
//! The current version for configuration is [`v1`].
pub mod v1;

use std::env;

use thiserror::Error;

// Environment variables

/// The whole `tracker_status.toml` file content. It has priority over the config file.
/// Even if the file is not on the default path.
const ENV_VAR_CONFIG_TOML: &str = "TORRUST_TRACKER_STATUS_CONFIG_TOML";

/// The `tracker_status.toml` file location.
pub const ENV_VAR_CONFIG_TOML_PATH: &str = "TORRUST_TRACKER_STATUS_CONFIG_TOML_PATH";

/// Prefix for the environment variables overriding single options, for example:
/// `TORRUST_TRACKER_STATUS_CONFIG_OVERRIDE_LOGGING__THRESHOLD=debug`.
pub const CONFIG_OVERRIDE_PREFIX: &str = "TORRUST_TRACKER_STATUS_CONFIG_OVERRIDE_";

/// Path separator in the override environment variables.
pub const CONFIG_OVERRIDE_SEPARATOR: &str = "__";

pub type Configuration = v1::Configuration;
pub type Core = v1::core::Core;
pub type Logging = v1::logging::Logging;
pub type Threshold = v1::logging::Threshold;

/// Information required for loading config
#[derive(Debug, Default, Clone)]
pub struct Info {
    config_toml: Option<String>,
    config_toml_path: String,
}

impl Info {
    /// Build Configuration Info
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to obtain a configuration.
    ///
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(default_config_toml_path: String) -> Result<Self, Error> {
        let config_toml = if let Ok(config_toml) = env::var(ENV_VAR_CONFIG_TOML) {
            eprintln!("Loading extra configuration from environment variable:\n {config_toml}");
            Some(config_toml)
        } else {
            None
        };

        let config_toml_path = if let Ok(config_toml_path) = env::var(ENV_VAR_CONFIG_TOML_PATH) {
            eprintln!("Loading extra configuration from file: `{config_toml_path}` ...");
            config_toml_path
        } else {
            eprintln!("Loading extra configuration from default configuration file: `{default_config_toml_path}` ...");
            default_config_toml_path
        };

        Ok(Self {
            config_toml,
            config_toml_path,
        })
    }

    /// Configuration info with the whole TOML content given directly.
    #[must_use]
    pub fn from_toml(config_toml: &str) -> Self {
        Self {
            config_toml: Some(config_toml.to_owned()),
            config_toml_path: String::new(),
        }
    }
}

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// Unable to load the configuration from the configuration file.
    #[error("Unable to load from Config File: {source}")]
    UnableToLoadFromConfigFile { source: std::io::Error },

    /// The configuration was loaded but it could not be processed.
    #[error("Failed processing the configuration: {source}")]
    ConfigError { source: Box<figment::Error> },

    /// The configuration could not be written as TOML.
    #[error("Failed serializing the configuration: {source}")]
    SerializationError { source: toml::ser::Error },
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigError { source: Box::new(err) }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::SerializationError { source: err }
    }
}
