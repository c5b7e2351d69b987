/// 256-color palette for the git segment, as `(fg, bg)` pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub clean: (u8, u8),
    pub dirty: (u8, u8),
    pub ahead: (u8, u8),
    pub behind: (u8, u8),
    pub staged: (u8, u8),
    pub changed: (u8, u8),
    pub new: (u8, u8),
    pub conflicted: (u8, u8),
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            clean: (0, 148),
            dirty: (15, 161),
            ahead: (250, 240),
            behind: (250, 240),
            staged: (15, 22),
            changed: (15, 130),
            new: (15, 52),
            conflicted: (15, 9),
        }
    }
}
