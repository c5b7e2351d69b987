use crate::symbols;
use crate::types::{RepoStats, RepoStatus};

use super::Theme;

/// One colored run of prompt text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub text: String,
    pub fg: u8,
    pub bg: u8,
}

impl Piece {
    fn new(text: String, (fg, bg): (u8, u8)) -> Self {
        Self { text, fg, bg }
    }
}

/// Count prefix: a single item shows only its symbol.
fn n_or_empty(n: u64) -> String {
    if n > 1 { n.to_string() } else { String::new() }
}

fn counter(n: u64, symbol: &str, colors: (u8, u8)) -> Option<Piece> {
    (n > 0).then(|| Piece::new(format!(" {}{symbol} ", n_or_empty(n)), colors))
}

fn counter_pieces(stats: &RepoStats, theme: &Theme) -> Vec<Piece> {
    [
        counter(stats.ahead.unwrap_or(0), symbols::AHEAD, theme.ahead),
        counter(stats.behind.unwrap_or(0), symbols::BEHIND, theme.behind),
        counter(stats.staged, symbols::STAGED, theme.staged),
        counter(stats.changed, symbols::CHANGED, theme.changed),
        counter(stats.new, symbols::NEW, theme.new),
        counter(stats.conflicted, symbols::CONFLICTED, theme.conflicted),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Lay out the git segment: the branch label in clean or dirty colors, then
/// one piece per non-zero counter. An unavailable status yields no pieces.
#[must_use]
pub fn segment_pieces(status: &RepoStatus, theme: &Theme) -> Vec<Piece> {
    let RepoStatus::Available { stats, branch } = status else {
        return Vec::new();
    };
    let colors = if stats.dirty() { theme.dirty } else { theme.clean };
    let mut pieces = vec![Piece::new(format!(" {branch} "), colors)];
    pieces.extend(counter_pieces(stats, theme));
    pieces
}
