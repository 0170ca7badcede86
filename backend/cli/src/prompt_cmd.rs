//! `armonia prompt`: fill a system prompt template for one mode.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use armonia_config::ArmoniaConfig;
use armonia_core::{ArmoniaError, ChatMessage};
use armonia_logging::{EventLogger, RenderEvent};
use armonia_prompts::{
    apply_rhyme_template, apply_template, build_messages, rhyme_user_prompt, snap,
    synonyms_user_prompt, Diction, LyricRequest, Mode, PromptVars, RhymeRequest, Tone,
};
use clap::Args;
use tokio::fs;

use crate::io::{read_input, write_output};

#[derive(Debug, Args)]
pub struct PromptArgs {
    /// Template file; relative paths resolve against `prompts.templateDir`
    #[arg(long)]
    pub template: PathBuf,

    /// help, writing, thesaurus or rhyme
    #[arg(long, default_value = "help")]
    pub mode: Mode,

    #[arg(long)]
    pub dialect: Option<String>,

    /// Repeat for several genres
    #[arg(long = "genre")]
    pub genres: Vec<String>,

    /// Tone slider position, 0-100
    #[arg(long)]
    pub tone_slider: Option<f64>,

    /// Diction slider position, 0-100
    #[arg(long)]
    pub diction_slider: Option<f64>,

    /// Word to rhyme (rhyme mode)
    #[arg(long)]
    pub target: Option<String>,

    /// Also build the user message and print the full message list as JSON
    #[arg(long)]
    pub message: Option<String>,

    /// Lyric request JSON (dialect, genres, tone, diction, message); fills the
    /// writing prompt and supplies the user message
    #[arg(long, conflicts_with_all = ["mode", "message", "target"])]
    pub request: Option<PathBuf>,

    /// Prior chat history (JSON array of messages) placed before the user message
    #[arg(long)]
    pub history: Option<PathBuf>,

    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub async fn run(args: PromptArgs, config: &ArmoniaConfig) -> Result<()> {
    let path = resolve_template_path(&args.template, config.template_dir());
    let template = fs::read_to_string(&path)
        .await
        .map_err(|source| ArmoniaError::Template {
            path: path.clone(),
            source,
        })?;

    let request = match &args.request {
        Some(path) => Some(
            parse_lyric_request(&read_input(Some(path.as_path())).await?)
                .with_context(|| format!("invalid lyric request {}", path.display()))?,
        ),
        None => None,
    };

    let (mode, system, message) = match &request {
        Some(request) => {
            let (system, message) = fill_from_request(&template, request);
            (Mode::Writing, system, Some(message))
        }
        None => (
            args.mode,
            fill_system_prompt(&template, &args)?,
            args.message.as_deref().map(|m| user_prompt(&args, m)),
        ),
    };
    EventLogger::log_event(RenderEvent::Prompt {
        mode: mode.label().to_string(),
        template_bytes: template.len(),
        prompt_bytes: system.len(),
    });

    let text = match message {
        None => system,
        Some(user) => {
            let history: Vec<ChatMessage> = match &args.history {
                Some(path) => serde_json::from_str(&read_input(Some(path.as_path())).await?)
                    .map_err(ArmoniaError::from)?,
                None => Vec::new(),
            };
            serde_json::to_string_pretty(&build_messages(system, &history, user))?
        }
    };

    write_output(args.output.as_deref(), &text).await
}

pub fn resolve_template_path(template: &Path, template_dir: Option<&str>) -> PathBuf {
    match template_dir {
        Some(dir) if template.is_relative() && !dir.trim().is_empty() => Path::new(dir).join(template),
        _ => template.to_path_buf(),
    }
}

/// Fills the template the way the mode's endpoint does.
pub fn fill_system_prompt(template: &str, args: &PromptArgs) -> Result<String> {
    if args.mode == Mode::RhymeEngine {
        let Some(target) = &args.target else {
            bail!("rhyme mode needs --target");
        };
        let request = RhymeRequest {
            target: target.clone(),
            dialect: args.dialect.clone().unwrap_or_default(),
            genres: args.genres.clone(),
        };
        return Ok(apply_rhyme_template(template, &request));
    }

    let vars = PromptVars {
        mode: Some(args.mode.label().to_string()),
        dialect: args.dialect.clone(),
        genre: (!args.genres.is_empty()).then(|| args.genres.join(", ")),
        tone: args.tone_slider.map(|v| Tone::from_slider(snap(v)).to_string()),
        diction: args
            .diction_slider
            .map(|v| Diction::from_slider(snap(v)).to_string()),
    };
    Ok(apply_template(template, &vars))
}

pub fn parse_lyric_request(raw: &str) -> serde_json::Result<LyricRequest> {
    serde_json::from_str(raw)
}

/// The writing prompt and user message for a lyric request. An empty genre
/// list falls back to the default genre.
pub fn fill_from_request(template: &str, request: &LyricRequest) -> (String, String) {
    (
        apply_template(template, &request.prompt_vars()),
        request.message.clone(),
    )
}

/// The user message text each mode sends alongside the system prompt.
pub fn user_prompt(args: &PromptArgs, message: &str) -> String {
    match args.mode {
        Mode::Thesaurus => {
            let lines: Vec<&str> = message.lines().collect();
            synonyms_user_prompt(&lines)
        }
        Mode::RhymeEngine => rhyme_user_prompt(args.target.as_deref().unwrap_or(message)),
        Mode::Help | Mode::Writing => message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(mode: Mode) -> PromptArgs {
        PromptArgs {
            template: PathBuf::from("writing_mode.txt"),
            mode,
            dialect: None,
            genres: Vec::new(),
            tone_slider: None,
            diction_slider: None,
            target: None,
            message: None,
            request: None,
            history: None,
            output: None,
        }
    }

    #[test]
    fn sliders_pick_labels() {
        let mut a = args(Mode::Writing);
        a.tone_slider = Some(80.0);
        a.diction_slider = Some(10.0);
        a.genres = vec!["Soul".into(), "Jazz".into()];
        let prompt = fill_system_prompt("{{MODE}} {{TONE}} {{DICTION}} {{GENRE}} {{DIALECT}}", &a).unwrap();
        assert_eq!(prompt, "Writing Hopeful Conversational Soul, Jazz American (Default)");
    }

    #[test]
    fn rhyme_mode_requires_target() {
        let mut a = args(Mode::RhymeEngine);
        assert!(fill_system_prompt("{{TARGET}}", &a).is_err());

        a.target = Some("moon".into());
        a.dialect = Some("AAVE".into());
        assert_eq!(
            fill_system_prompt("{{MODE}} {{TARGET}} {{DIALECT}} {{GENRE}}", &a).unwrap(),
            "RHYME_ENGINE moon AAVE "
        );
        assert_eq!(user_prompt(&a, "ignored"), rhyme_user_prompt("moon"));
    }

    #[test]
    fn thesaurus_numbers_message_lines() {
        let a = args(Mode::Thesaurus);
        assert_eq!(
            user_prompt(&a, "bright night\ncold hands"),
            "Analyze synonyms by line:\n1. bright night\n2. cold hands"
        );
    }

    #[test]
    fn lyric_request_drives_writing_prompt() {
        let request = parse_lyric_request(
            r#"{"dialect":"Southern","genres":["Country","Folk"],"tone":"Hopeful",
                "message":"a song about rivers"}"#,
        )
        .unwrap();
        let (system, user) = fill_from_request("{{MODE}}|{{DIALECT}}|{{GENRE}}|{{TONE}}|{{DICTION}}", &request);
        assert_eq!(system, "Writing|Southern|Country, Folk|Hopeful|Conversational");
        assert_eq!(user, "a song about rivers");

        let empty = parse_lyric_request("{}").unwrap();
        assert_eq!(fill_from_request("{{GENRE}}", &empty), ("None".to_string(), String::new()));
        assert!(parse_lyric_request("[1, 2]").is_err());
    }

    #[test]
    fn relative_templates_use_template_dir() {
        assert_eq!(
            resolve_template_path(Path::new("help.txt"), Some("/srv/prompts")),
            PathBuf::from("/srv/prompts/help.txt")
        );
        assert_eq!(
            resolve_template_path(Path::new("/abs/help.txt"), Some("/srv/prompts")),
            PathBuf::from("/abs/help.txt")
        );
        assert_eq!(
            resolve_template_path(Path::new("help.txt"), None),
            PathBuf::from("help.txt")
        );
    }
}
