//! Initialize configuration from file or env var.
//!
//! All environment variables are prefixed with `TORRUST_TRACKER_STATUS_`.
use torrust_tracker_status_configuration::{Configuration, Error, Info};

// Default values
pub const DEFAULT_PATH_CONFIG: &str = "./share/default/config/tracker_status.development.toml";

/// It loads the application configuration from the environment.
///
/// There are two methods to inject the configuration:
///
/// 1. By using a config file: `tracker_status.toml`.
/// 2. Environment variable: `TORRUST_TRACKER_STATUS_CONFIG_TOML`. The variable contains the same contents as the `tracker_status.toml` file.
///
/// Environment variable has priority over the config file.
///
/// Refer to the [configuration documentation](https://docs.rs/torrust-tracker-status-configuration) for the configuration options.
///
/// # Errors
///
/// Will return an error if it can't load the configuration from either
/// the config file or the env var `TORRUST_TRACKER_STATUS_CONFIG_TOML`.
pub fn initialize_configuration() -> Result<Configuration, Error> {
    let info = Info::new(DEFAULT_PATH_CONFIG.to_string())?;

    Configuration::load(&info)
}
