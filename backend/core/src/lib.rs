pub mod error;
pub mod message;

pub use error::ArmoniaError;
pub use message::{ChatMessage, Role};
