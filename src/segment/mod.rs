mod collector;
mod format;
mod theme;

pub use collector::collect_segment;
pub use format::{Piece, segment_pieces};
pub use theme::Theme;
