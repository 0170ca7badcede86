//! Armonia configuration schema.
//!
//! Every section and field is optional in the file; [`crate::apply_all_defaults`]
//! fills what the runtime needs.

use serde::{Deserialize, Serialize};

use crate::defaults::{DEFAULT_LOG_JSON, DEFAULT_LOG_LEVEL};

/// Root configuration (`config.yaml`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmoniaConfig {
    /// Markdown rendering behavior
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render: Option<RenderConfig>,

    /// Log level and sinks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingConfig>,

    /// Where system prompt templates live
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompts: Option<PromptsConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderConfig {
    /// Entity-escape reply text before rendering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escape_html: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// `trace`, `debug`, `info`, `warn` or `error`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Directory for the rolling NDJSON log; no file log when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,

    /// Write the file log as JSON lines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_dir: Option<String>,
}

impl ArmoniaConfig {
    pub fn escape_html(&self) -> bool {
        self.render
            .as_ref()
            .and_then(|r| r.escape_html)
            .unwrap_or(false)
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.level.as_deref())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn log_directory(&self) -> Option<&str> {
        self.logging
            .as_ref()
            .and_then(|l| l.directory.as_deref())
            .filter(|d| !d.trim().is_empty())
    }

    pub fn log_json(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.json)
            .unwrap_or(DEFAULT_LOG_JSON)
    }

    pub fn template_dir(&self) -> Option<&str> {
        self.prompts.as_ref().and_then(|p| p.template_dir.as_deref())
    }
}
