//! Application bootstrapping.
//!
//! This module includes the functions to load the configuration and to set
//! up the logging for the applications embedding the library.
pub mod config;
pub mod logging;
