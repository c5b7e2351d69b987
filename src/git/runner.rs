use std::path::Path;
use std::process::{Command, Output, Stdio};

use tracing::trace;

use super::GitEnv;

pub trait GitRunner: Sync {
    /// Run the `git` command within the given `repo` with `args` and wait for it.
    ///
    /// # Errors
    /// Returns an error if the `git` process cannot be spawned or fails during execution.
    fn run_git(&self, repo: &Path, args: &[&str]) -> std::io::Result<Output>;

    /// Start `git` with `args` and return without waiting. Output is discarded
    /// and the child is never joined.
    ///
    /// # Errors
    /// Returns an error if the `git` process cannot be spawned.
    fn spawn_detached(&self, repo: &Path, args: &[&str]) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct DefaultGitRunner {
    env: GitEnv,
}

impl Default for DefaultGitRunner {
    /// Runner pinned to this process's `HOME` and `PATH`.
    fn default() -> Self {
        Self::new(GitEnv::from_process())
    }
}

impl DefaultGitRunner {
    #[must_use]
    pub fn new(env: GitEnv) -> Self {
        Self { env }
    }

    fn command(&self, repo: &Path, args: &[&str]) -> Command {
        trace!(repo = %repo.display(), ?args, "git");
        let mut cmd = Command::new("git");
        self.env.apply(&mut cmd);
        cmd.arg("-C").arg(repo).args(args).stdin(Stdio::null());
        cmd
    }

    /// Background child: no terminal prompts, and its own process group so
    /// Ctrl-C at the prompt does not reach it.
    fn detached_command(&self, repo: &Path, args: &[&str]) -> Command {
        let mut cmd = self.command(repo, args);
        cmd.env("GIT_TERMINAL_PROMPT", "0")
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            cmd.process_group(0);
        }
        cmd
    }
}

impl GitRunner for DefaultGitRunner {
    fn run_git(&self, repo: &Path, args: &[&str]) -> std::io::Result<Output> {
        self.command(repo, args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
    }

    fn spawn_detached(&self, repo: &Path, args: &[&str]) -> std::io::Result<()> {
        // Dropping the handle neither kills nor waits on the child.
        self.detached_command(repo, args).spawn().map(drop)
    }
}
