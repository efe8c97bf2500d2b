//! Infrastructure seams. The services are generic over an infra value that
//! implements the subset of these traits they need; production code plugs in
//! the real filesystem, tests plug in mocks.

use std::path::{Path, PathBuf};
use std::time::Duration;

use bytes::Bytes;
use chrono::{DateTime, Utc};

use crate::{RemoveError, ScanOutcome};

/// Path resolution and process environment.
pub trait EnvironmentInfra: Send + Sync {
    /// Lexically absolutizes a path against the working directory, without
    /// touching the filesystem or following symlinks.
    fn absolute(&self, path: &Path) -> anyhow::Result<PathBuf>;

    fn home_dir(&self) -> Option<PathBuf>;
}

#[async_trait::async_trait]
pub trait FileReaderInfra: Send + Sync {
    async fn read_utf8(&self, path: &Path) -> anyhow::Result<String>;
}

#[async_trait::async_trait]
pub trait FileWriterInfra: Send + Sync {
    /// Writes the full contents, truncating any existing file.
    async fn write(&self, path: &Path, contents: Bytes) -> anyhow::Result<()>;
}

#[async_trait::async_trait]
pub trait FileDirectoryInfra: Send + Sync {
    async fn create_dirs(&self, path: &Path) -> anyhow::Result<()>;
}

#[async_trait::async_trait]
pub trait FileInfoInfra: Send + Sync {
    async fn exists(&self, path: &Path) -> anyhow::Result<bool>;

    async fn is_dir(&self, path: &Path) -> anyhow::Result<bool>;

    async fn modified(&self, path: &Path) -> anyhow::Result<DateTime<Utc>>;
}

#[async_trait::async_trait]
pub trait DirectoryReaderInfra: Send + Sync {
    /// Non-recursive listing of the files directly inside a directory.
    async fn list_files(&self, directory: &Path) -> anyhow::Result<Vec<PathBuf>>;
}

#[async_trait::async_trait]
pub trait FileRemoverInfra: Send + Sync {
    /// Removes a file or a directory tree.
    async fn remove_all(&self, path: &Path) -> Result<(), RemoveError>;
}

#[async_trait::async_trait]
pub trait WalkerInfra: Send + Sync {
    /// Finds every bookkeeping folder in the tree under `root`, treating each
    /// one as a leaf: the walk never descends into a folder it yields.
    async fn find_marker_folders(&self, root: &Path) -> ScanOutcome;
}

/// Wall clock, jitter, and sleeping, kept behind a seam so schedules are
/// testable with a scripted clock.
#[async_trait::async_trait]
pub trait ClockInfra: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Uniform random duration in `[0, upper)`.
    fn jitter(&self, upper: Duration) -> Duration;

    async fn sleep(&self, duration: Duration);
}

/// Destinations for human-readable progress and error lines.
///
/// The core writes to these sinks and never reads from them; whether they are
/// backed by a console, files, or memory is up to the caller.
pub trait ReportSink: Send + Sync {
    fn progress(&self, line: &str);

    fn error(&self, line: &str);
}
