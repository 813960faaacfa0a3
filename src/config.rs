//! Console configuration.

use crate::error::Result;
use crate::layout::Breakpoints;
use crate::service::DEFAULT_API_ROOT;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for a console instance.
///
/// Every field has a default, so a partial JSON document is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Width to column-count table.
    pub breakpoints: Breakpoints,
    /// Pixel width of one terminal cell, for terminal hosts.
    pub cell_width_px: f64,
    /// Root of the REST API.
    pub api_root: String,
    /// Capacity of each board's event queue.
    pub event_capacity: usize,
    /// Capacity of each board's snapshot queue.
    pub snapshot_capacity: usize,
    /// Terminal poll timeout in milliseconds.
    pub input_poll_timeout_ms: u64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            cell_width_px: 8.0,
            api_root: DEFAULT_API_ROOT.to_string(),
            event_capacity: 64,
            snapshot_capacity: 4,
            input_poll_timeout_ms: 10,
        }
    }
}

impl ConsoleConfig {
    /// Parse a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Terminal poll timeout.
    pub const fn input_poll_timeout(&self) -> Duration {
        Duration::from_millis(self.input_poll_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = ConsoleConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.input_poll_timeout(), Duration::from_millis(10));
    }

    #[test]
    fn test_partial_override() {
        let config = ConsoleConfig::from_json_str(
            r#"{
                "api_root": "/console/api",
                "breakpoints": {"tiers": [{"min_width": 1000, "columns": 3}], "fallback": 1}
            }"#,
        )
        .unwrap();
        assert_eq!(config.api_root, "/console/api");
        assert_eq!(config.breakpoints.columns_for_width(1200.0), 3);
        assert_eq!(config.breakpoints.columns_for_width(900.0), 1);
        assert_eq!(config.event_capacity, 64);
    }

    #[test]
    fn test_invalid_breakpoints_rejected() {
        let result = ConsoleConfig::from_json_str(r#"{"breakpoints": {"tiers": [], "fallback": 0}}"#);
        assert!(result.is_err());
    }
}
