mod describe;
mod env;
mod fetch;
mod runner;
mod status;

pub use env::GitEnv;
pub use fetch::FETCH_MARKER;
pub use runner::{DefaultGitRunner, GitRunner};
pub use status::{parse_branch_info, parse_stats};

pub(crate) use describe::detached_label;
pub(crate) use fetch::schedule_fetch;
pub(crate) use status::repo_status;
