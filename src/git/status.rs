use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::types::{BranchInfo, RepoStats, RepoStatus, Unavailable};

use super::{GitRunner, detached_label};

/// `## <local>[...<remote>[ [ahead N][, ][behind M]]]`
static BRANCH_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^## (?P<local>\S+?)(\.{3}(?P<remote>\S+?)( \[(ahead (?P<ahead>\d+)(, )?)?(behind (?P<behind>\d+))?\])?)?$",
    )
    .expect("branch header pattern compiles")
});

const CONFLICT_CODES: [&str; 7] = ["DD", "AU", "UD", "UA", "DU", "AA", "UU"];

/// Parse the `## ` header line of `git status --porcelain -b`.
///
/// Returns `None` when the line does not follow the header grammar, which
/// covers detached heads (`## HEAD (no branch)`) and unborn branches.
#[must_use]
pub fn parse_branch_info(line: &str) -> Option<BranchInfo> {
    let caps = BRANCH_HEADER.captures(line)?;
    let count = |name: &str| caps.name(name).and_then(|m| m.as_str().parse::<u64>().ok());
    Some(BranchInfo {
        local: caps.name("local")?.as_str().to_string(),
        remote: caps.name("remote").map(|m| m.as_str().to_string()),
        ahead: count("ahead"),
        behind: count("behind"),
    })
}

/// Tally the file lines of a porcelain report. Line 0 is the branch header
/// and is skipped.
#[must_use]
pub fn parse_stats(lines: &[&str]) -> RepoStats {
    let mut stats = RepoStats::default();
    for line in lines.iter().skip(1) {
        let Some(code) = line.get(..2) else {
            continue;
        };
        if code == "??" {
            stats.new += 1;
        } else if CONFLICT_CODES.contains(&code) {
            stats.conflicted += 1;
        } else {
            let mut chars = code.chars();
            if chars.next().is_some_and(|c| c != ' ') {
                stats.staged += 1;
            }
            if chars.next().is_some_and(|c| c != ' ') {
                stats.changed += 1;
            }
        }
    }
    stats
}

pub(crate) fn parse_status(text: &str) -> (RepoStats, Option<BranchInfo>) {
    let lines: Vec<&str> = text.lines().collect();
    let mut stats = parse_stats(&lines);
    let branch = lines.first().and_then(|line| parse_branch_info(line));
    if let Some(info) = &branch {
        stats.ahead = info.ahead;
        stats.behind = info.behind;
    }
    (stats, branch)
}

/// Query and parse the working tree status of `repo`.
pub(crate) fn repo_status(repo: &Path, git: &dyn GitRunner) -> RepoStatus {
    let out = match git.run_git(repo, &["status", "--porcelain", "-b"]) {
        Ok(out) => out,
        Err(err) => {
            debug!(error = %err, "git status could not be started");
            return RepoStatus::Unavailable(Unavailable::GitNotFound(err.to_string()));
        }
    };
    if !out.status.success() {
        debug!(code = ?out.status.code(), "git status failed");
        return RepoStatus::Unavailable(Unavailable::Failed {
            code: out.status.code(),
        });
    }

    let text = String::from_utf8_lossy(&out.stdout);
    let (stats, info) = parse_status(&text);
    let branch = match info {
        Some(info) => info.local,
        None => detached_label(repo, git),
    };
    RepoStatus::Available { stats, branch }
}
