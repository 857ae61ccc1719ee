//! Configuration schema definitions.
//!
//! This module defines the configuration structure for parkade. Every field
//! is optional so partial files can be layered on top of each other. Only
//! presentation is configurable; the lot itself always starts uncreated.

use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use parkade::config::Config;
/// use parkade::output::OutputFormat;
///
/// let config: Config = serde_yaml::from_str("format: json\nlog_mode: quiet\n").unwrap();
/// assert_eq!(config.output_format, Some(OutputFormat::Json));
/// assert_eq!(config.log_mode.as_deref(), Some("quiet"));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// How responses are written to stdout.
    #[serde(default, rename = "format", skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,

    /// Log verbosity: quiet, normal or verbose.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_mode: Option<String>,
}

impl Config {
    /// The output format in effect, falling back to human-readable text.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}
