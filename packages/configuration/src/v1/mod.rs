//! Version `1` for [Torrust Tracker Status](https://docs.rs/torrust-tracker-status)
//! configuration data structures.
//!
//! This module contains the configuration data structures for the
//! Torrust Tracker Status library.
//!
//! # Sections
//!
//! Each section in the toml structure is mapped to a data structure. For
//! example, the `[core]` section is mapped to the [`Core`](crate::v1::core::Core)
//! data structure.
//!
//! # Loading configuration
//!
//! Configuration can be provided in three ways, merged in this order:
//!
//! 1. The default values of every option.
//! 2. A TOML file, or the whole TOML content in the
//!    `TORRUST_TRACKER_STATUS_CONFIG_TOML` env var (it has priority over the file).
//! 3. Env vars overriding single options, for example
//!    `TORRUST_TRACKER_STATUS_CONFIG_OVERRIDE_CORE__DEFAULT_TIER=1`.
//!
//! # Default configuration
//!
//! ```toml
//! [logging]
//! threshold = "info"
//!
//! [core]
//! default_tier = 0
//! ```
pub mod core;
pub mod logging;

use std::fs;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use self::core::Core;
use self::logging::Logging;
use crate::{Error, Info, CONFIG_OVERRIDE_PREFIX, CONFIG_OVERRIDE_SEPARATOR};

/// Core configuration for the tracker status library.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Default, Clone)]
pub struct Configuration {
    /// Logging configuration
    #[serde(default)]
    pub logging: Logging,

    /// Core configuration.
    #[serde(default)]
    pub core: Core,
}

impl Configuration {
    /// Loads the configuration from the `Info` struct.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the configuration file can't be read or the
    /// configuration is not valid.
    pub fn load(info: &Info) -> Result<Configuration, Error> {
        let config_toml = match &info.config_toml {
            Some(config_toml) => config_toml.clone(),
            None => fs::read_to_string(&info.config_toml_path)
                .map_err(|source| Error::UnableToLoadFromConfigFile { source })?,
        };

        Self::load_from_toml(&config_toml)
    }

    /// Loads the configuration from the configuration file.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `path` does not exist or has a bad configuration.
    pub fn load_from_file(path: &str) -> Result<Configuration, Error> {
        let config_toml = fs::read_to_string(path).map_err(|source| Error::UnableToLoadFromConfigFile { source })?;

        Self::load_from_toml(&config_toml)
    }

    fn load_from_toml(config_toml: &str) -> Result<Configuration, Error> {
        let figment = Figment::from(Serialized::defaults(Configuration::default()))
            .merge(Toml::string(config_toml))
            .merge(Env::prefixed(CONFIG_OVERRIDE_PREFIX).split(CONFIG_OVERRIDE_SEPARATOR));

        let config: Configuration = figment.extract()?;

        Ok(config)
    }

    /// Encodes the configuration to TOML.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the configuration can't be serialized.
    pub fn to_toml(&self) -> Result<String, Error> {
        Ok(toml::to_string(self)?)
    }
}
