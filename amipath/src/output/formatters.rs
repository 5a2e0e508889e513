//! Formatter implementations.

use super::OutputFormatter;
use crate::error::{Error, Result};
use crate::path::AmiPath;

/// Formatter printing one path per line.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format(&self, paths: &[AmiPath]) -> Result<String> {
        Ok(paths
            .iter()
            .map(AmiPath::as_str)
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, paths: &[AmiPath]) -> Result<String> {
        serde_json::to_string_pretty(paths).map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize to JSON: {e}"),
        })
    }
}
