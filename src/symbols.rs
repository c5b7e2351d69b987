//! Glyphs used in the rendered segment.

pub const DETACHED: &str = "\u{2693}";
pub const AHEAD: &str = "\u{2B06}";
pub const BEHIND: &str = "\u{2B07}";
pub const STAGED: &str = "\u{2714}";
pub const CHANGED: &str = "\u{270E}";
pub const NEW: &str = "+";
pub const CONFLICTED: &str = "\u{273C}";

/// Label used when HEAD is detached and `git describe` has nothing to say.
pub const NO_HISTORY: &str = "Big Bang";
