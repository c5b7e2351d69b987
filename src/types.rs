use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

/// Default staleness threshold for the fetch marker (15 minutes).
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(15 * 60);

/// File tallies and upstream distance for one working tree.
///
/// `ahead`/`behind` are `None` when the branch does not track a remote or the
/// header carried no count, which is not the same as zero.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct RepoStats {
    pub new: u64,
    pub changed: u64,
    pub staged: u64,
    pub conflicted: u64,
    pub ahead: Option<u64>,
    pub behind: Option<u64>,
}

impl RepoStats {
    #[must_use]
    pub fn dirty(&self) -> bool {
        self.new > 0
            || self.changed > 0
            || self.staged > 0
            || self.conflicted > 0
            || self.ahead.is_some_and(|n| n > 0)
            || self.behind.is_some_and(|n| n > 0)
    }
}

/// Parsed `## ` header of a porcelain status report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchInfo {
    pub local: String,
    pub remote: Option<String>,
    pub ahead: Option<u64>,
    pub behind: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoStatus {
    Available { stats: RepoStats, branch: String },
    Unavailable(Unavailable),
}

impl RepoStatus {
    #[must_use]
    pub fn stats(&self) -> Option<&RepoStats> {
        match self {
            Self::Available { stats, .. } => Some(stats),
            Self::Unavailable(_) => None,
        }
    }

    #[must_use]
    pub fn branch(&self) -> Option<&str> {
        match self {
            Self::Available { branch, .. } => Some(branch),
            Self::Unavailable(_) => None,
        }
    }

    /// Split into the `(stats, label)` pair consumed by prompt renderers.
    #[must_use]
    pub fn into_parts(self) -> (Option<RepoStats>, Option<String>) {
        match self {
            Self::Available { stats, branch } => (Some(stats), Some(branch)),
            Self::Unavailable(_) => (None, None),
        }
    }
}

/// Why the status query produced nothing to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unavailable {
    /// `git` could not be launched at all.
    GitNotFound(String),
    /// `git status` ran and exited non-zero (e.g. not a repository).
    Failed { code: Option<i32> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Disabled,
    Fresh { age: Duration },
    Launched { age: Duration },
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    TopLevelUnavailable,
    MarkerUnavailable,
    SpawnFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchSettings {
    pub enabled: bool,
    pub timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Working tree to inspect; every git command runs with `-C dir`.
    pub dir: PathBuf,
    pub fetch: FetchSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentData {
    pub status: RepoStatus,
    pub fetch: FetchOutcome,
}
