//! Status notes for the terminal.
//!
//! Notes go to stderr so they never mix with HTML or prompts on stdout.

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Check if the terminal supports color output.
pub fn supports_color() -> bool {
    std::env::var("NO_COLOR").is_err()
        && (std::env::var("COLORTERM").is_ok()
            || std::env::var("TERM")
                .map(|t| t != "dumb")
                .unwrap_or(false))
}

fn format_note(symbol: &str, color: &str, plain: &str, msg: &str, colored: bool) -> String {
    if colored {
        format!("{color}{BOLD}{symbol}{RESET} {msg}")
    } else {
        format!("{plain}: {msg}")
    }
}

/// Print a formatted WARNING note.
pub fn note_warn(msg: &str) {
    eprintln!("{}", format_note("⚠", YELLOW, "WARN", msg, supports_color()));
}

/// Print a formatted SUCCESS note.
pub fn note_success(msg: &str) {
    eprintln!("{}", format_note("✓", GREEN, "OK", msg, supports_color()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_note_has_label() {
        assert_eq!(format_note("✓", GREEN, "OK", "done", false), "OK: done");
    }

    #[test]
    fn colored_note_resets_style() {
        let note = format_note("⚠", YELLOW, "WARN", "careful", true);
        assert!(note.starts_with(YELLOW));
        assert!(note.ends_with(&format!("{RESET} careful")));
    }
}
