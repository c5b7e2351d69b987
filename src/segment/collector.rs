use tracing::debug;

use crate::git::{GitRunner, repo_status, schedule_fetch};
use crate::system::{Clock, FsOps};
use crate::types::{Options, SegmentData};

/// Gather everything the git segment needs for one prompt render.
///
/// The status query and the fetch scheduler share nothing, so they run side
/// by side; neither can fail the render.
#[must_use]
pub fn collect_segment(
    opts: &Options,
    git: &dyn GitRunner,
    fs: &dyn FsOps,
    clock: &dyn Clock,
) -> SegmentData {
    let (status, fetch) = rayon::join(
        || repo_status(&opts.dir, git),
        || schedule_fetch(&opts.dir, opts.fetch, git, fs, clock),
    );
    debug!(?status, ?fetch, "segment collected");
    SegmentData { status, fetch }
}
