use std::fmt::Write as _;

use clap::ValueEnum;

use crate::segment::Piece;

const RESET: &str = "\x1b[0m";

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Bare,
}

impl Shell {
    /// Wrap a raw escape so the shell does not count it toward prompt width.
    fn wrap(self, code: &str) -> String {
        match self {
            Self::Bash => format!("\\[{code}\\]"),
            Self::Zsh => format!("%{{{code}%}}"),
            Self::Bare => code.to_string(),
        }
    }

    fn color(self, fg: u8, bg: u8) -> String {
        self.wrap(&format!("\x1b[38;5;{fg}m\x1b[48;5;{bg}m"))
    }
}

#[must_use]
pub fn format_prompt(pieces: &[Piece], shell: Shell) -> String {
    if pieces.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    for piece in pieces {
        let _ = write!(out, "{}{}", shell.color(piece.fg, piece.bg), piece.text);
    }
    out.push_str(&shell.wrap(RESET));
    out
}
