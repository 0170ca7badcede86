//! Chat bubble Markdown renderer.
//!
//! Converts the small Markdown subset that model replies use (emphasis,
//! inline code, headings, bullet and numbered lines) into an HTML fragment
//! ready to be set as the inner markup of a message bubble.

pub mod escape;
pub mod renderer;

pub use escape::escape_html;
pub use renderer::{render_markdown, render_markdown_with, MarkdownRenderer, RenderOptions};
