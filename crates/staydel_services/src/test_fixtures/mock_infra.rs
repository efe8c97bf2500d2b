//! An in-memory filesystem, a scripted clock, and capturing report sinks,
//! implementing every infra seam the services are written against.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use bytes::Bytes;
use chrono::{DateTime, TimeZone, Utc};
use staydel_domain::{
    ClockInfra, DirectoryReaderInfra, EnvironmentInfra, FileDirectoryInfra, FileInfoInfra,
    FileReaderInfra, FileRemoverInfra, FileWriterInfra, MARKER_FOLDER_NAME, RemoveError,
    ReportSink, ScanOutcome, WalkerInfra,
};

#[derive(Debug, Clone)]
struct MockFile {
    contents: Bytes,
    modified: DateTime<Utc>,
}

pub struct MockInfra {
    files: Mutex<BTreeMap<PathBuf, MockFile>>,
    dirs: Mutex<BTreeSet<PathBuf>>,
    now: Mutex<DateTime<Utc>>,
    jitters: Mutex<VecDeque<Duration>>,
    sleeps: Mutex<Vec<Duration>>,
    unremovable: Mutex<BTreeSet<PathBuf>>,
    scan_limit: Mutex<Option<(usize, String)>>,
    progress_lines: Mutex<Vec<String>>,
    error_lines: Mutex<Vec<String>>,
}

impl Default for MockInfra {
    fn default() -> Self {
        Self::new()
    }
}

impl MockInfra {
    pub fn new() -> Self {
        let infra = Self {
            files: Mutex::new(BTreeMap::new()),
            dirs: Mutex::new(BTreeSet::new()),
            now: Mutex::new(Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()),
            jitters: Mutex::new(VecDeque::new()),
            sleeps: Mutex::new(Vec::new()),
            unremovable: Mutex::new(BTreeSet::new()),
            scan_limit: Mutex::new(None),
            progress_lines: Mutex::new(Vec::new()),
            error_lines: Mutex::new(Vec::new()),
        };
        infra.add_dir("/test");
        infra.add_dir("/test/home");
        infra
    }

    pub fn add_file(&self, path: impl AsRef<Path>, contents: &str) {
        let path = path.as_ref().to_path_buf();
        self.insert_ancestors(&path);
        self.files.lock().unwrap().insert(
            path,
            MockFile {
                contents: Bytes::from(contents.to_string()),
                modified: *self.now.lock().unwrap(),
            },
        );
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = path.as_ref().to_path_buf();
        self.insert_ancestors(&path);
        self.dirs.lock().unwrap().insert(path);
    }

    pub fn set_modified(&self, path: impl AsRef<Path>, modified: DateTime<Utc>) {
        let mut files = self.files.lock().unwrap();
        let file = files
            .get_mut(path.as_ref())
            .unwrap_or_else(|| panic!("no mock file at {:?}", path.as_ref()));
        file.modified = modified;
    }

    /// Makes every `remove_all` of this exact path fail.
    pub fn fail_removal_of(&self, path: impl AsRef<Path>) {
        self.unremovable
            .lock()
            .unwrap()
            .insert(path.as_ref().to_path_buf());
    }

    /// Makes the next scan stop after yielding `limit` folders, as if the
    /// walk had hit an unreadable entry.
    pub fn abort_scan_after(&self, limit: usize, message: &str) {
        *self.scan_limit.lock().unwrap() = Some((limit, message.to_string()));
    }

    pub fn push_jitter(&self, duration: Duration) {
        self.jitters.lock().unwrap().push_back(duration);
    }

    pub fn has_path(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        self.files.lock().unwrap().contains_key(path)
            || self.dirs.lock().unwrap().contains(path)
    }

    pub fn file_contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files
            .lock()
            .unwrap()
            .get(path.as_ref())
            .map(|file| String::from_utf8_lossy(&file.contents).into_owned())
    }

    pub fn progress_lines(&self) -> Vec<String> {
        self.progress_lines.lock().unwrap().clone()
    }

    pub fn error_lines(&self) -> Vec<String> {
        self.error_lines.lock().unwrap().clone()
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }

    fn insert_ancestors(&self, path: &Path) {
        let mut dirs = self.dirs.lock().unwrap();
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }
}

impl EnvironmentInfra for MockInfra {
    fn absolute(&self, path: &Path) -> anyhow::Result<PathBuf> {
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            Ok(Path::new("/test").join(path))
        }
    }

    fn home_dir(&self) -> Option<PathBuf> {
        Some(PathBuf::from("/test/home"))
    }
}

#[async_trait::async_trait]
impl FileReaderInfra for MockInfra {
    async fn read_utf8(&self, path: &Path) -> anyhow::Result<String> {
        self.file_contents(path)
            .ok_or_else(|| anyhow::anyhow!("File not found: {path:?}"))
    }
}

#[async_trait::async_trait]
impl FileWriterInfra for MockInfra {
    async fn write(&self, path: &Path, contents: Bytes) -> anyhow::Result<()> {
        self.insert_ancestors(path);
        self.files.lock().unwrap().insert(
            path.to_path_buf(),
            MockFile {
                contents,
                modified: *self.now.lock().unwrap(),
            },
        );
        Ok(())
    }
}

#[async_trait::async_trait]
impl FileDirectoryInfra for MockInfra {
    async fn create_dirs(&self, path: &Path) -> anyhow::Result<()> {
        self.add_dir(path);
        Ok(())
    }
}

#[async_trait::async_trait]
impl FileInfoInfra for MockInfra {
    async fn exists(&self, path: &Path) -> anyhow::Result<bool> {
        Ok(self.has_path(path))
    }

    async fn is_dir(&self, path: &Path) -> anyhow::Result<bool> {
        Ok(self.dirs.lock().unwrap().contains(path))
    }

    async fn modified(&self, path: &Path) -> anyhow::Result<DateTime<Utc>> {
        if let Some(file) = self.files.lock().unwrap().get(path) {
            return Ok(file.modified);
        }
        if self.dirs.lock().unwrap().contains(path) {
            return Ok(*self.now.lock().unwrap());
        }
        Err(anyhow::anyhow!("No such path: {path:?}"))
    }
}

#[async_trait::async_trait]
impl DirectoryReaderInfra for MockInfra {
    async fn list_files(&self, directory: &Path) -> anyhow::Result<Vec<PathBuf>> {
        if !self.dirs.lock().unwrap().contains(directory) {
            return Err(anyhow::anyhow!("Directory not found: {directory:?}"));
        }
        Ok(self
            .files
            .lock()
            .unwrap()
            .keys()
            .filter(|path| path.parent() == Some(directory))
            .cloned()
            .collect())
    }
}

#[async_trait::async_trait]
impl FileRemoverInfra for MockInfra {
    async fn remove_all(&self, path: &Path) -> Result<(), RemoveError> {
        if self.unremovable.lock().unwrap().contains(path) {
            return Err(RemoveError {
                path: path.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "locked by mock",
                ),
            });
        }

        let mut files = self.files.lock().unwrap();
        let mut dirs = self.dirs.lock().unwrap();
        if !files.contains_key(path) && !dirs.contains(path) {
            return Err(RemoveError {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no mock path"),
            });
        }

        files.retain(|existing, _| !existing.starts_with(path));
        dirs.retain(|existing| !existing.starts_with(path));
        Ok(())
    }
}

#[async_trait::async_trait]
impl WalkerInfra for MockInfra {
    async fn find_marker_folders(&self, root: &Path) -> ScanOutcome {
        let mut folders: Vec<PathBuf> = self
            .dirs
            .lock()
            .unwrap()
            .iter()
            .filter(|dir| {
                dir.starts_with(root)
                    && dir.file_name().is_some_and(|name| name == MARKER_FOLDER_NAME)
            })
            .cloned()
            .collect();

        let mut aborted = None;
        if let Some((limit, message)) = self.scan_limit.lock().unwrap().clone() {
            folders.truncate(limit);
            aborted = Some(message);
        }

        ScanOutcome { folders, aborted }
    }
}

#[async_trait::async_trait]
impl ClockInfra for MockInfra {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }

    fn jitter(&self, _upper: Duration) -> Duration {
        self.jitters
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Duration::ZERO)
    }

    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
    }
}

impl ReportSink for MockInfra {
    fn progress(&self, line: &str) {
        self.progress_lines.lock().unwrap().push(line.to_string());
    }

    fn error(&self, line: &str) {
        self.error_lines.lock().unwrap().push(line.to_string());
    }
}
