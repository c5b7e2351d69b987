use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tracing::debug;

use crate::system::{Clock, FsOps};
use crate::types::{FetchOutcome, FetchSettings, SkipReason};

use super::GitRunner;

/// Marker whose mtime git bumps on every successful fetch, relative to the
/// repository top level.
pub const FETCH_MARKER: &str = ".git/FETCH_HEAD";

const FETCH_ARGS: [&str; 3] = ["fetch", "--all", "--quiet"];

fn top_level(repo: &Path, git: &dyn GitRunner) -> Option<PathBuf> {
    let out = git
        .run_git(repo, &["rev-parse", "--show-toplevel"])
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let s = String::from_utf8_lossy(&out.stdout).trim().to_string();
    if s.is_empty() { None } else { Some(PathBuf::from(s)) }
}

/// Time elapsed since `mtime`; a marker from the future counts as brand new.
pub(crate) fn marker_age(mtime: SystemTime, now: SystemTime) -> Duration {
    now.duration_since(mtime).unwrap_or(Duration::ZERO)
}

/// Launch a background `git fetch --all --quiet` when the fetch marker is
/// older than `settings.timeout`. Never waits on the fetch and never fails;
/// every problem collapses into [`FetchOutcome::Skipped`].
pub(crate) fn schedule_fetch(
    repo: &Path,
    settings: FetchSettings,
    git: &dyn GitRunner,
    fs: &dyn FsOps,
    clock: &dyn Clock,
) -> FetchOutcome {
    if !settings.enabled {
        return FetchOutcome::Disabled;
    }
    let Some(top) = top_level(repo, git) else {
        debug!(repo = %repo.display(), "no repository top level, skipping fetch");
        return FetchOutcome::Skipped(SkipReason::TopLevelUnavailable);
    };
    let marker = top.join(FETCH_MARKER);
    let mtime = match fs.modified(&marker) {
        Ok(mtime) => mtime,
        Err(err) => {
            debug!(marker = %marker.display(), error = %err, "fetch marker unavailable");
            return FetchOutcome::Skipped(SkipReason::MarkerUnavailable);
        }
    };

    let age = marker_age(mtime, clock.now());
    if age <= settings.timeout {
        debug!(age_secs = age.as_secs(), "fetch marker is recent");
        return FetchOutcome::Fresh { age };
    }
    debug!(age_secs = age.as_secs(), "fetch marker is stale, fetching");
    match git.spawn_detached(&top, &FETCH_ARGS) {
        Ok(()) => FetchOutcome::Launched { age },
        Err(err) => {
            debug!(error = %err, "could not start background fetch");
            FetchOutcome::Skipped(SkipReason::SpawnFailed)
        }
    }
}
