//! Output formatting for command responses.
//!
//! Responses can be rendered as the plain text transcript users read, or as
//! one JSON object per line for scripts.

mod formatters;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dispatch::Response;
use crate::error::{Error, Result};

pub use formatters::{HumanFormatter, JsonFormatter};

/// Trait for rendering a response into output text.
pub trait OutputFormatter {
    /// Format one response. The result has no trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if the response cannot be serialized.
    fn format(&self, response: &Response) -> Result<String>;
}

/// Available output formats.
///
/// # Examples
///
/// ```
/// use parkade::output::OutputFormat;
///
/// let format: OutputFormat = "json".parse().unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// assert_eq!(format.to_string(), "json");
/// assert!("xml".parse::<OutputFormat>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one message per response.
    #[default]
    Human,
    /// One compact JSON object per response.
    Json,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(Error::Validation {
                field: "format".into(),
                message: format!("unknown output format '{s}' (expected human or json)"),
            }),
        }
    }
}
