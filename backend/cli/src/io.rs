//! Reading command input and writing command output.

use std::path::Path;

use anyhow::{Context, Result};
use armonia_core::ArmoniaError;
use tokio::fs;
use tokio::io::{self, AsyncReadExt, AsyncWriteExt};

use crate::terminal_output::note_success;

/// Reads a file, or stdin when no path (or `-`) is given.
pub async fn read_input(path: Option<&Path>) -> Result<String, ArmoniaError> {
    match path {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path)
                .await
                .map_err(|source| ArmoniaError::Input {
                    path: path.to_path_buf(),
                    source,
                })
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .await
                .map_err(|source| ArmoniaError::Input {
                    path: "<stdin>".into(),
                    source,
                })?;
            Ok(buf)
        }
    }
}

/// Writes to a file, or stdout followed by a newline when no path is given.
pub async fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, text)
                .await
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            note_success(&format!("Wrote {} bytes to {}", text.len(), path.display()));
        }
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(text.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_and_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("reply.md");
        let output = dir.path().join("reply.html");
        std::fs::write(&input, "**hi**").unwrap();

        let text = read_input(Some(input.as_path())).await.unwrap();
        assert_eq!(text, "**hi**");

        write_output(Some(output.as_path()), "<strong>hi</strong>").await.unwrap();
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "<strong>hi</strong>");
    }

    #[tokio::test]
    async fn missing_input_is_an_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_input(Some(dir.path().join("absent.md").as_path()))
            .await
            .unwrap_err();
        assert!(matches!(err, ArmoniaError::Input { .. }));
        assert!(err.to_string().contains("absent.md"));
    }
}
