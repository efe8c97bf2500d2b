use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use staydel_domain::{
    ClockInfra, DirectoryReaderInfra, EnvironmentInfra, FileDirectoryInfra, FileInfoInfra,
    FileReaderInfra, FileRemoverInfra, FileWriterInfra, RemoveError, ReportSink, ScanOutcome,
    WalkerInfra,
};

use crate::clock::StayDelClockService;
use crate::env::StayDelEnvironmentService;
use crate::fs_create_dirs::StayDelCreateDirsService;
use crate::fs_meta::StayDelFileMetaService;
use crate::fs_read::StayDelFileReadService;
use crate::fs_read_dir::StayDelDirectoryReadService;
use crate::fs_remove::StayDelFileRemoveService;
use crate::fs_write::StayDelFileWriteService;
use crate::report::ConsoleReportService;
use crate::walker::StayDelWalkerService;

/// Composite over the per-concern infra services; the one value the binary
/// hands to every service constructor.
#[derive(Clone)]
pub struct StayDelInfra {
    file_read_service: Arc<StayDelFileReadService>,
    file_write_service: Arc<StayDelFileWriteService>,
    create_dirs_service: Arc<StayDelCreateDirsService>,
    file_meta_service: Arc<StayDelFileMetaService>,
    directory_read_service: Arc<StayDelDirectoryReadService>,
    file_remove_service: Arc<StayDelFileRemoveService>,
    walker_service: Arc<StayDelWalkerService>,
    environment_service: Arc<StayDelEnvironmentService>,
    clock_service: Arc<StayDelClockService>,
    report_service: Arc<ConsoleReportService>,
}

impl StayDelInfra {
    pub fn new() -> Self {
        Self {
            file_read_service: Arc::new(StayDelFileReadService::new()),
            file_write_service: Arc::new(StayDelFileWriteService::new()),
            create_dirs_service: Arc::new(StayDelCreateDirsService),
            file_meta_service: Arc::new(StayDelFileMetaService),
            directory_read_service: Arc::new(StayDelDirectoryReadService),
            file_remove_service: Arc::new(StayDelFileRemoveService::new()),
            walker_service: Arc::new(StayDelWalkerService::new()),
            environment_service: Arc::new(StayDelEnvironmentService),
            clock_service: Arc::new(StayDelClockService),
            report_service: Arc::new(ConsoleReportService),
        }
    }
}

impl Default for StayDelInfra {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvironmentInfra for StayDelInfra {
    fn absolute(&self, path: &Path) -> Result<PathBuf> {
        self.environment_service.absolute(path)
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.environment_service.home_dir()
    }
}

#[async_trait::async_trait]
impl FileReaderInfra for StayDelInfra {
    async fn read_utf8(&self, path: &Path) -> Result<String> {
        self.file_read_service.read_utf8(path).await
    }
}

#[async_trait::async_trait]
impl FileWriterInfra for StayDelInfra {
    async fn write(&self, path: &Path, contents: Bytes) -> Result<()> {
        self.file_write_service.write(path, contents).await
    }
}

#[async_trait::async_trait]
impl FileDirectoryInfra for StayDelInfra {
    async fn create_dirs(&self, path: &Path) -> Result<()> {
        self.create_dirs_service.create_dirs(path).await
    }
}

#[async_trait::async_trait]
impl FileInfoInfra for StayDelInfra {
    async fn exists(&self, path: &Path) -> Result<bool> {
        self.file_meta_service.exists(path).await
    }

    async fn is_dir(&self, path: &Path) -> Result<bool> {
        self.file_meta_service.is_dir(path).await
    }

    async fn modified(&self, path: &Path) -> Result<DateTime<Utc>> {
        self.file_meta_service.modified(path).await
    }
}

#[async_trait::async_trait]
impl DirectoryReaderInfra for StayDelInfra {
    async fn list_files(&self, directory: &Path) -> Result<Vec<PathBuf>> {
        self.directory_read_service.list_files(directory).await
    }
}

#[async_trait::async_trait]
impl FileRemoverInfra for StayDelInfra {
    async fn remove_all(&self, path: &Path) -> std::result::Result<(), RemoveError> {
        self.file_remove_service.remove_all(path).await
    }
}

#[async_trait::async_trait]
impl WalkerInfra for StayDelInfra {
    async fn find_marker_folders(&self, root: &Path) -> ScanOutcome {
        self.walker_service.find_marker_folders(root).await
    }
}

#[async_trait::async_trait]
impl ClockInfra for StayDelInfra {
    fn now(&self) -> DateTime<Utc> {
        self.clock_service.now()
    }

    fn jitter(&self, upper: Duration) -> Duration {
        self.clock_service.jitter(upper)
    }

    async fn sleep(&self, duration: Duration) {
        self.clock_service.sleep(duration).await;
    }
}

impl ReportSink for StayDelInfra {
    fn progress(&self, line: &str) {
        self.report_service.progress(line);
    }

    fn error(&self, line: &str) {
        self.report_service.error(line);
    }
}
