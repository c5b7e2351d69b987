#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]

mod config;
mod git;
mod logging;
mod segment;
mod system;
mod types;
pub mod output;
pub mod symbols;

#[cfg(all(test, unix))]
mod test_support;

pub use config::{Config, ConfigError, GitSection, config_path_from, default_config_path, load_config, parse_config};
pub use git::{DefaultGitRunner, FETCH_MARKER, GitEnv, GitRunner, parse_branch_info, parse_stats};
pub use logging::init_logging;
pub use segment::{Piece, Theme, collect_segment, segment_pieces};
pub use system::{Clock, DefaultClock, DefaultFsOps, FsOps};
pub use types::{
    BranchInfo, DEFAULT_FETCH_TIMEOUT, FetchOutcome, FetchSettings, Options, RepoStats, RepoStatus,
    SegmentData, SkipReason, Unavailable,
};
