use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use bytes::Bytes;
use staydel_domain::{
    Action, DirectoryReaderInfra, EnvironmentInfra, FileDirectoryInfra, FileInfoInfra,
    FileReaderInfra, FileWriterInfra, MARKER_FOLDER_NAME, MarkerRecord, ReportSink,
    marker_file_name,
};
use tracing::debug;

use crate::path_list::read_path_list;

/// Per-directory marker bookkeeping: writing marks, and listing the records
/// a sweep classifies.
pub struct MarkerStoreService<F> {
    infra: Arc<F>,
}

impl<F> MarkerStoreService<F> {
    pub fn new(infra: Arc<F>) -> Self {
        Self { infra }
    }
}

impl<F: EnvironmentInfra> MarkerStoreService<F> {
    /// Bookkeeping folder governing `file`: `<absolute parent>/.stay-deleted`.
    pub fn marker_folder(&self, file: &Path) -> anyhow::Result<PathBuf> {
        let absolute = self.infra.absolute(file)?;
        let parent = absolute
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or(absolute);
        Ok(parent.join(MARKER_FOLDER_NAME))
    }

    /// Absolute path of the marker record governing `file`.
    pub fn marker_path(&self, file: &Path) -> anyhow::Result<PathBuf> {
        let absolute = self.infra.absolute(file)?;
        let base = file_base_name(&absolute)?;
        Ok(self.marker_folder(&absolute)?.join(marker_file_name(&base)))
    }
}

impl<F> MarkerStoreService<F>
where
    F: EnvironmentInfra + FileInfoInfra + FileDirectoryInfra + FileWriterInfra + ReportSink,
{
    /// Records `action` for `file`, creating the bookkeeping folder when
    /// absent and overwriting any previous mark for the same base name.
    pub async fn set_action(&self, file: &Path, action: Action) -> anyhow::Result<()> {
        let absolute = self.infra.absolute(file)?;
        self.infra
            .progress(&format!("Marking '{}'", absolute.display()));

        let base = file_base_name(&absolute)?;
        let folder = self.marker_folder(&absolute)?;
        if !self.infra.exists(&folder).await? {
            self.infra
                .progress(&format!("Creating directory '{}'", folder.display()));
            self.infra
                .create_dirs(&folder)
                .await
                .with_context(|| format!("Couldn't create directory '{}'", folder.display()))?;
        }

        let marker = folder.join(marker_file_name(&base));
        self.infra
            .progress(&format!("Marker file '{}'", marker.display()));
        debug!(file = %absolute.display(), %action, "writing marker record");

        let record = MarkerRecord::new(base, action);
        self.infra
            .write(&marker, Bytes::from(record.encode()))
            .await
            .with_context(|| format!("Couldn't write marker file '{}'", marker.display()))
    }

    /// Marks every file, reporting failures and moving on; returns how many
    /// marks failed.
    pub async fn mark_all(&self, files: &[PathBuf], action: Action) -> usize {
        let mut failures = 0;
        for file in files {
            if let Err(error) = self.set_action(file, action.clone()).await {
                self.infra.error(&format!("{error:#}"));
                failures += 1;
            }
        }
        failures
    }
}

impl<F> MarkerStoreService<F>
where
    F: EnvironmentInfra
        + FileInfoInfra
        + FileDirectoryInfra
        + FileWriterInfra
        + FileReaderInfra
        + ReportSink,
{
    /// Marks every file named by a path-list file for deletion; returns how
    /// many marks failed.
    pub async fn mark_from(&self, list_file: &Path) -> anyhow::Result<usize> {
        self.infra
            .progress(&format!("Reading '{}'", list_file.display()));
        let files = read_path_list(self.infra.as_ref(), list_file).await?;
        Ok(self.mark_all(&files, Action::Delete).await)
    }
}

impl<F: DirectoryReaderInfra> MarkerStoreService<F> {
    /// Every `.txt` entry directly inside a bookkeeping folder.
    pub async fn records_in(&self, folder: &Path) -> anyhow::Result<Vec<PathBuf>> {
        let files = self.infra.list_files(folder).await?;
        Ok(files
            .into_iter()
            .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
            .collect())
    }
}

fn file_base_name(absolute: &Path) -> anyhow::Result<String> {
    absolute
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .with_context(|| format!("'{}' has no file name to mark", absolute.display()))
}
