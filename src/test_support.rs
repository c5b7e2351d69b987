use std::io;
use std::os::unix::process::ExitStatusExt;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Output};
use std::sync::Mutex;
use std::time::{Duration, SystemTime};

use crate::git::GitRunner;
use crate::system::{Clock, FsOps};

pub(crate) enum Reply {
    Stdout(&'static str),
    Exit(i32),
    NotFound,
}

/// Scripted `git`: each call is matched on its leading args.
pub(crate) struct FakeGit {
    replies: Vec<(Vec<&'static str>, Reply)>,
    spawn_fails: bool,
    pub(crate) calls: Mutex<Vec<Vec<String>>>,
    pub(crate) spawned: Mutex<Vec<(PathBuf, Vec<String>)>>,
}

impl FakeGit {
    pub(crate) fn new() -> Self {
        Self {
            replies: Vec::new(),
            spawn_fails: false,
            calls: Mutex::new(Vec::new()),
            spawned: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn missing() -> Self {
        Self::new().spawn_fails()
    }

    pub(crate) fn on(mut self, args: &[&'static str], reply: Reply) -> Self {
        self.replies.push((args.to_vec(), reply));
        self
    }

    pub(crate) fn spawn_fails(mut self) -> Self {
        self.spawn_fails = true;
        self
    }

    /// Detached launches as `(working dir, args)`.
    pub(crate) fn spawned(&self) -> Vec<(PathBuf, Vec<String>)> {
        self.spawned.lock().expect("spawned lock").clone()
    }

    pub(crate) fn called(&self, first: &str) -> bool {
        self.calls
            .lock()
            .expect("calls lock")
            .iter()
            .any(|c| c.first().is_some_and(|a| a == first))
    }
}

fn owned(args: &[&str]) -> Vec<String> {
    args.iter().map(|a| (*a).to_string()).collect()
}

impl GitRunner for FakeGit {
    fn run_git(&self, _repo: &Path, args: &[&str]) -> io::Result<Output> {
        self.calls.lock().expect("calls lock").push(owned(args));
        let reply = self
            .replies
            .iter()
            .find(|(prefix, _)| args.starts_with(prefix))
            .map(|(_, reply)| reply);
        match reply {
            Some(Reply::Stdout(text)) => Ok(Output {
                status: ExitStatus::from_raw(0),
                stdout: text.as_bytes().to_vec(),
                stderr: Vec::new(),
            }),
            Some(Reply::Exit(code)) => Ok(Output {
                status: ExitStatus::from_raw(code << 8),
                stdout: Vec::new(),
                stderr: b"fatal: not a git repository".to_vec(),
            }),
            Some(Reply::NotFound) => {
                Err(io::Error::new(io::ErrorKind::NotFound, "git: not found"))
            }
            None if self.spawn_fails => {
                Err(io::Error::new(io::ErrorKind::NotFound, "git: not found"))
            }
            None => Ok(Output {
                status: ExitStatus::from_raw(1 << 8),
                stdout: Vec::new(),
                stderr: Vec::new(),
            }),
        }
    }

    fn spawn_detached(&self, repo: &Path, args: &[&str]) -> io::Result<()> {
        if self.spawn_fails {
            return Err(io::Error::new(io::ErrorKind::NotFound, "git: not found"));
        }
        self.spawned
            .lock()
            .expect("spawned lock")
            .push((repo.to_path_buf(), owned(args)));
        Ok(())
    }
}

/// Filesystem with a single known file.
pub(crate) struct FakeFs {
    pub(crate) path: PathBuf,
    pub(crate) mtime: Option<SystemTime>,
}

impl FsOps for FakeFs {
    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        match self.mtime {
            Some(t) if path == self.path => Ok(t),
            _ => Err(io::Error::new(io::ErrorKind::NotFound, "no such file")),
        }
    }
}

pub(crate) struct FixedClock(pub(crate) SystemTime);

impl Clock for FixedClock {
    fn now(&self) -> SystemTime {
        self.0
    }
}

pub(crate) fn epoch_plus(secs: u64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
}
