//! Output formatter implementations.

use crate::dispatch::Response;
use crate::{Error, Result};

use super::OutputFormatter;

/// Formatter for the plain text transcript.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format(&self, response: &Response) -> Result<String> {
        Ok(response.to_string())
    }
}

/// Formatter for JSON lines output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, response: &Response) -> Result<String> {
        serde_json::to_string(response).map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize to JSON: {e}"),
        })
    }
}
