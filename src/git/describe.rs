use std::path::Path;

use tracing::debug;

use crate::symbols::{DETACHED, NO_HISTORY};

use super::GitRunner;

/// Label for a working tree whose HEAD is not on a named branch: the nearest
/// tag or abbreviated commit id, or [`NO_HISTORY`] when git cannot describe it.
pub(crate) fn detached_label(repo: &Path, git: &dyn GitRunner) -> String {
    match git.run_git(repo, &["describe", "--tags", "--always"]) {
        Ok(out) if out.status.success() => {
            let described = String::from_utf8_lossy(&out.stdout);
            format!("{DETACHED} {}", described.trim_end_matches(['\n', '\r']))
        }
        Ok(out) => {
            debug!(code = ?out.status.code(), "git describe failed");
            NO_HISTORY.to_string()
        }
        Err(err) => {
            debug!(error = %err, "git describe could not be started");
            NO_HISTORY.to_string()
        }
    }
}
