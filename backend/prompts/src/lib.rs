//! Prompt-side helpers around the chat renderer.
//!
//! Fills the `{{PLACEHOLDER}}` system prompt templates for each mode, maps
//! the lyric sliders to their tone/diction labels, and pulls the reply text
//! out of a model result so it can be rendered.

pub mod reply;
pub mod sliders;
pub mod template;

pub use reply::extract_reply;
pub use sliders::{snap, Diction, Tone};
pub use template::{
    apply_rhyme_template, apply_template, build_messages, number_lines, rhyme_user_prompt,
    synonyms_user_prompt, LyricRequest, Mode, PromptVars, RhymeRequest,
};
