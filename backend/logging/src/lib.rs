//! Structured logging for Armonia.
//!
//! Console output goes to stderr (stdout carries rendered HTML), with an
//! optional daily-rolling file log and structured render/prompt events.

pub mod event_logger;
pub mod logger;

pub use event_logger::{preview, EventLogEntry, EventLogger, RenderEvent, PREVIEW_CHARS};
pub use logger::{init_logger, LogSettings};
