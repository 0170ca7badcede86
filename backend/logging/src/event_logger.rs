//! Render Event Logger
//!
//! Structured events for each render, reply extraction and prompt fill,
//! emitted on the `armonia_events` target.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

/// Characters of input kept in an event preview.
pub const PREVIEW_CHARS: usize = 80;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderEvent {
    Render {
        input_bytes: usize,
        output_bytes: usize,
        escaped: bool,
        preview: String,
    },
    Reply {
        result_bytes: usize,
        reply_bytes: usize,
        output_bytes: usize,
    },
    Prompt {
        mode: String,
        template_bytes: usize,
        prompt_bytes: usize,
    },
}

impl RenderEvent {
    pub fn render(input: &str, output: &str, escaped: bool) -> Self {
        RenderEvent::Render {
            input_bytes: input.len(),
            output_bytes: output.len(),
            escaped,
            preview: preview(input, PREVIEW_CHARS),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EventLogEntry {
    pub timestamp: DateTime<Utc>,
    pub event: RenderEvent,
}

pub struct EventLogger;

impl EventLogger {
    /// Stamps the event and writes it as one JSON field of an `info` record.
    pub fn log_event(event: RenderEvent) {
        let entry = EventLogEntry {
            timestamp: Utc::now(),
            event,
        };
        match serde_json::to_string(&entry) {
            Ok(json) => info!(target: "armonia_events", event = %json, "Armonia event"),
            Err(e) => info!(target: "armonia_events", error = %e, event = ?entry, "Armonia event"),
        }
    }
}

/// First `max_chars` characters of `text` on one line, with `…` when cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let mut out: String = chars
        .by_ref()
        .take(max_chars)
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if chars.next().is_some() {
        out.push('…');
    }
    out
}
