use std::io;
use std::path::Path;
use std::time::SystemTime;

pub trait FsOps: Sync {
    /// Last-modified time of `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be stat'ed.
    fn modified(&self, path: &Path) -> io::Result<SystemTime>;
}

pub struct DefaultFsOps;
impl FsOps for DefaultFsOps {
    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        std::fs::metadata(path)?.modified()
    }
}

pub trait Clock: Sync {
    fn now(&self) -> SystemTime;
}

pub struct DefaultClock;
impl Clock for DefaultClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}
