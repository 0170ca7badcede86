//! `armonia render` and `armonia reply`.

use std::path::PathBuf;

use anyhow::Result;
use armonia_config::ArmoniaConfig;
use armonia_core::ArmoniaError;
use armonia_logging::{EventLogger, RenderEvent};
use armonia_markdown::{MarkdownRenderer, RenderOptions};
use armonia_prompts::extract_reply;
use clap::Args;
use tracing::debug;

use crate::io::{read_input, write_output};

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Input file; stdin when omitted or `-`
    pub input: Option<PathBuf>,

    /// Entity-escape the input before rendering
    #[arg(long)]
    pub escape_html: bool,

    /// Write the fragment to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl RenderArgs {
    fn renderer(&self, config: &ArmoniaConfig) -> MarkdownRenderer {
        MarkdownRenderer::new(RenderOptions {
            escape_html: self.escape_html || config.escape_html(),
        })
    }
}

/// Render Markdown from a file or stdin.
pub async fn run_render(args: RenderArgs, config: &ArmoniaConfig) -> Result<()> {
    let source = read_input(args.input.as_deref()).await?;
    let renderer = args.renderer(config);

    let html = renderer.render(source.as_str());
    EventLogger::log_event(RenderEvent::render(
        &source,
        &html,
        renderer.options().escape_html,
    ));

    write_output(args.output.as_deref(), &html).await
}

/// Extract the reply from a model result JSON and render it.
pub async fn run_reply(args: RenderArgs, config: &ArmoniaConfig) -> Result<()> {
    let raw = read_input(args.input.as_deref()).await?;
    let renderer = args.renderer(config);

    let (reply, html) = render_reply(&raw, &renderer)?;
    EventLogger::log_event(RenderEvent::Reply {
        result_bytes: raw.len(),
        reply_bytes: reply.len(),
        output_bytes: html.len(),
    });

    write_output(args.output.as_deref(), &html).await
}

/// Returns the extracted reply text and its rendered fragment.
pub fn render_reply(raw: &str, renderer: &MarkdownRenderer) -> Result<(String, String), ArmoniaError> {
    let result: serde_json::Value = serde_json::from_str(raw)?;
    let reply = extract_reply(&result);
    debug!(reply_len = reply.len(), "Extracted model reply");
    let html = renderer.render(reply.as_str());
    Ok((reply, html))
}
