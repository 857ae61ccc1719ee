//! Environment variable handling for configuration overrides.
//!
//! This module provides support for PARKADE_* environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::Result;
use std::env;

/// Overrides the output format.
pub const FORMAT_ENV: &str = "PARKADE_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// `PARKADE_LOG_MODE` is read by the logger itself, not here.
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an invalid value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(format) = env::var(FORMAT_ENV) {
            config.output_format = Some(format.parse()?);
        }

        Ok(())
    }
}
