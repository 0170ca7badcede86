//! System prompt templates and the user-side prompt text for each mode.
//!
//! Templates are plain text with `{{NAME}}` placeholders. Every occurrence
//! of a placeholder is replaced; unknown placeholders are left as they are.

use std::fmt;
use std::str::FromStr;

use armonia_core::ChatMessage;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_MODE: &str = "Help";
pub const DEFAULT_DIALECT: &str = "American (Default)";
pub const DEFAULT_GENRE: &str = "None";
pub const DEFAULT_TONE: &str = "Neutral";
pub const DEFAULT_DICTION: &str = "Conversational";

/// Which assistant a system prompt is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Help,
    Writing,
    Thesaurus,
    RhymeEngine,
}

impl Mode {
    /// Value substituted for `{{MODE}}`.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Help => "Help",
            Mode::Writing => "Writing",
            Mode::Thesaurus => "Thesaurus",
            Mode::RhymeEngine => "RHYME_ENGINE",
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "help" => Ok(Mode::Help),
            "writing" | "lyric" => Ok(Mode::Writing),
            "thesaurus" | "synonyms" => Ok(Mode::Thesaurus),
            "rhyme" | "rhyme_engine" | "rhyme-engine" => Ok(Mode::RhymeEngine),
            other => Err(format!(
                "unknown mode '{other}'; expected help, writing, thesaurus or rhyme"
            )),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Placeholder values for [`apply_template`]. Missing or empty values fall
/// back to the defaults above.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptVars {
    pub mode: Option<String>,
    pub dialect: Option<String>,
    pub genre: Option<String>,
    pub tone: Option<String>,
    pub diction: Option<String>,
}

impl PromptVars {
    pub fn for_mode(mode: Mode) -> Self {
        Self {
            mode: Some(mode.label().to_string()),
            ..Default::default()
        }
    }
}

/// Body of a lyric generation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LyricRequest {
    #[serde(default)]
    pub dialect: Option<String>,
    #[serde(default)]
    pub genres: Option<Vec<String>>,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub diction: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl LyricRequest {
    /// Template values for the writing prompt; an empty genre list counts
    /// as no genre.
    pub fn prompt_vars(&self) -> PromptVars {
        PromptVars {
            mode: Some(Mode::Writing.label().to_string()),
            dialect: self.dialect.clone(),
            genre: self.genres.as_ref().map(|genres| genres.join(", ")),
            tone: self.tone.clone(),
            diction: self.diction.clone(),
        }
    }
}

/// Input for the rhyme engine prompt. No defaults apply here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RhymeRequest {
    pub target: String,
    pub dialect: String,
    #[serde(default)]
    pub genres: Vec<String>,
}

fn or_default<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v,
        _ => default,
    }
}

/// Fills `{{MODE}}`, `{{DIALECT}}`, `{{GENRE}}`, `{{TONE}}` and `{{DICTION}}`.
pub fn apply_template(template: &str, vars: &PromptVars) -> String {
    let prompt = template
        .replace("{{MODE}}", or_default(&vars.mode, DEFAULT_MODE))
        .replace("{{DIALECT}}", or_default(&vars.dialect, DEFAULT_DIALECT))
        .replace("{{GENRE}}", or_default(&vars.genre, DEFAULT_GENRE))
        .replace("{{TONE}}", or_default(&vars.tone, DEFAULT_TONE))
        .replace("{{DICTION}}", or_default(&vars.diction, DEFAULT_DICTION));
    debug!(
        template_len = template.len(),
        prompt_len = prompt.len(),
        "Applied prompt template"
    );
    prompt
}

/// Fills the rhyme engine template: `{{MODE}}`, `{{TARGET}}`, `{{DIALECT}}`
/// and `{{GENRE}}` (genres joined with `", "`).
pub fn apply_rhyme_template(template: &str, request: &RhymeRequest) -> String {
    template
        .replace("{{MODE}}", Mode::RhymeEngine.label())
        .replace("{{TARGET}}", &request.target)
        .replace("{{DIALECT}}", &request.dialect)
        .replace("{{GENRE}}", &request.genres.join(", "))
}

pub fn rhyme_user_prompt(target: &str) -> String {
    format!("Give me 5 true rhymes and 5 slant rhymes for \"{target}\". Include slang.")
}

/// Numbers lines from 1 as `"1. first\n2. second"`.
pub fn number_lines<S: AsRef<str>>(lines: &[S]) -> String {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{}. {}", i + 1, line.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn synonyms_user_prompt<S: AsRef<str>>(lines: &[S]) -> String {
    format!("Analyze synonyms by line:\n{}", number_lines(lines))
}

/// Assembles the message list sent to the model: system prompt, prior
/// history in order, then the new user message.
pub fn build_messages(
    system: impl Into<String>,
    history: &[ChatMessage],
    user: impl Into<String>,
) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(ChatMessage::system(system));
    messages.extend_from_slice(history);
    messages.push(ChatMessage::user(user));
    messages
}
