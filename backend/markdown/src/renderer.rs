//! Substitution pipeline turning reply Markdown into an HTML fragment.
//!
//! The pipeline is a fixed, ordered list of global regex replacements over
//! the whole text. Later steps see the output of earlier ones, so the order
//! is part of the behavior: emphasis, inline code, headings, bullet lists,
//! numbered lists, then line breaks.
//!
//! List wrapping is greedy. Each wrap spans from the first `<li>` to the last
//! `</li>` anywhere in the text, so mixed bullet and numbered lines produce
//! crossed `<ul>`/`<ol>` nesting, and re-rendering rendered output wraps its
//! items again. Both are kept as-is; callers rely on the exact output.
//!
//! "Line" follows browser regex semantics: line content never crosses `\r`,
//! `\n`, U+2028 or U+2029, and a line may start after any of them. The
//! line-anchored patterns capture a leading U+2028/U+2029 as group 1 and
//! put it back, since `^` only knows `\r` and `\n` (CRLF mode).

use std::borrow::Cow;

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::escape::escape_html;

struct Patterns {
    bold: Regex,
    italic: Regex,
    inline_code: Regex,
    h3: Regex,
    h2: Regex,
    h1: Regex,
    bullet_item: Regex,
    numbered_item: Regex,
    list_span: Regex,
}

static RE: LazyLock<Patterns> = LazyLock::new(|| Patterns {
    bold: Regex::new(r"\*\*([^\r\n\x{2028}\x{2029}]*?)\*\*").unwrap(),
    italic: Regex::new(r"\*([^\r\n\x{2028}\x{2029}]*?)\*").unwrap(),
    inline_code: Regex::new(r"`([^`]+)`").unwrap(),
    h3: Regex::new(r"(?mR)(^|[\x{2028}\x{2029}])### ([^\r\n\x{2028}\x{2029}]*)").unwrap(),
    h2: Regex::new(r"(?mR)(^|[\x{2028}\x{2029}])## ([^\r\n\x{2028}\x{2029}]*)").unwrap(),
    h1: Regex::new(r"(?mR)(^|[\x{2028}\x{2029}])# ([^\r\n\x{2028}\x{2029}]*)").unwrap(),
    bullet_item: Regex::new(
        r"(?mR)(^|[\x{2028}\x{2029}])[\s\x{FEFF}]*[-•] ([^\r\n\x{2028}\x{2029}]*)",
    )
    .unwrap(),
    numbered_item: Regex::new(
        r"(?mR)(^|[\x{2028}\x{2029}])[\s\x{FEFF}]*[0-9]+\. ([^\r\n\x{2028}\x{2029}]*)",
    )
    .unwrap(),
    list_span: Regex::new(r"(?s)(<li>.*</li>)").unwrap(),
});

/// Opt-in behavior for [`render_markdown_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Entity-escape the input before any Markdown substitution.
    ///
    /// Off by default: reply text, including any raw HTML in it, is passed
    /// through to the fragment untouched.
    pub escape_html: bool,
}

/// A renderer carrying its [`RenderOptions`], for callers that hold one
/// configured instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    pub fn render<'a>(&self, md: impl Into<Option<&'a str>>) -> String {
        render_markdown_with(md, &self.options)
    }
}

/// Renders Markdown to an HTML fragment with default options.
///
/// `None` and the empty string both yield an empty string. Never fails:
/// malformed markup comes out as literal characters.
pub fn render_markdown<'a>(md: impl Into<Option<&'a str>>) -> String {
    render_markdown_with(md, &RenderOptions::default())
}

/// Renders Markdown to an HTML fragment.
pub fn render_markdown_with<'a>(md: impl Into<Option<&'a str>>, options: &RenderOptions) -> String {
    let md = match md.into() {
        Some(md) if !md.is_empty() => md,
        _ => return String::new(),
    };

    let source = if options.escape_html {
        escape_html(md)
    } else {
        Cow::Borrowed(md)
    };

    let html = apply_emphasis(&source);
    let html = apply_inline_code(&html);
    let html = apply_headings(&html);
    let html = apply_bullet_list(&html);
    let html = apply_numbered_list(&html);
    let html = html.replace('\n', "<br>");

    let rendered = html
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .to_string();
    trace!(
        input_len = md.len(),
        output_len = rendered.len(),
        escaped = options.escape_html,
        "Rendered markdown fragment"
    );
    rendered
}

/// Bold first, so `**` pairs are consumed before single `*` is read as italic.
fn apply_emphasis(text: &str) -> String {
    let html = RE.bold.replace_all(text, "<strong>${1}</strong>");
    RE.italic.replace_all(&html, "<em>${1}</em>").into_owned()
}

fn apply_inline_code(text: &str) -> String {
    RE.inline_code
        .replace_all(text, "<code>${1}</code>")
        .into_owned()
}

/// Deepest level first; each pattern requires exactly its own marker run
/// followed by a space, so `####` lines are left alone.
fn apply_headings(text: &str) -> String {
    let html = RE.h3.replace_all(text, "${1}<h3>${2}</h3>");
    let html = RE.h2.replace_all(&html, "${1}<h2>${2}</h2>");
    RE.h1.replace_all(&html, "${1}<h1>${2}</h1>").into_owned()
}

/// The `<ul>` wrap runs even when no bullet line matched, so any `<li>`
/// already in the text is wrapped.
fn apply_bullet_list(text: &str) -> String {
    let html = RE.bullet_item.replace_all(text, "${1}<li>${2}</li>");
    RE.list_span
        .replace_all(&html, "<ul>${1}</ul>")
        .into_owned()
}

/// The `<ol>` wrap runs only when at least one numbered line was converted.
fn apply_numbered_list(text: &str) -> String {
    match RE.numbered_item.replace_all(text, "${1}<li>${2}</li>") {
        Cow::Borrowed(unchanged) => unchanged.to_string(),
        Cow::Owned(html) => RE
            .list_span
            .replace_all(&html, "<ol>${1}</ol>")
            .into_owned(),
    }
}
