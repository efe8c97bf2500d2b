use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use staydel_domain::{
    Action, CandidateReason, ClockInfra, DeletionCandidate, DirectoryReaderInfra,
    EnvironmentInfra, FileInfoInfra, FileReaderInfra, FileRemoverInfra, MarkerRecord, ReportSink,
    SweepConfig, SweepStats, WalkerInfra, is_marker_file_name,
};
use tracing::debug;

use crate::executor::DeletionExecutor;
use crate::path_list::read_path_list;
use crate::store::MarkerStoreService;

/// The sweep engine: discovers bookkeeping folders under a root, classifies
/// every record into keep/delete/purge decisions, then hands the accumulated
/// deletion list to the executor.
///
/// Classification for a root always completes before its first deletion
/// executes; classification itself never removes anything.
pub struct SweepService<F> {
    infra: Arc<F>,
    config: SweepConfig,
    store: MarkerStoreService<F>,
    executor: DeletionExecutor<F>,
}

impl<F> SweepService<F> {
    pub fn new(infra: Arc<F>, config: SweepConfig) -> Self {
        Self {
            store: MarkerStoreService::new(infra.clone()),
            executor: DeletionExecutor::new(infra.clone()),
            infra,
            config,
        }
    }
}

impl<F> SweepService<F>
where
    F: EnvironmentInfra
        + FileInfoInfra
        + FileReaderInfra
        + DirectoryReaderInfra
        + FileRemoverInfra
        + WalkerInfra
        + ClockInfra
        + ReportSink,
{
    /// Sweeps every configured path: a directory is swept as a tree root, a
    /// file is read as a path list naming tree roots.
    pub async fn sweep_paths(&self, paths: &[PathBuf]) -> SweepStats {
        let mut stats = SweepStats::default();
        for path in paths {
            stats.absorb(self.sweep_path(path).await);
        }
        stats
    }

    async fn sweep_path(&self, path: &Path) -> SweepStats {
        match self.infra.is_dir(path).await {
            Ok(true) => self.sweep_root(path).await,
            Ok(false) => self.sweep_from(path).await,
            Err(error) => {
                self.infra.error(&format!("{error:#}"));
                SweepStats {
                    errors: 1,
                    ..Default::default()
                }
            }
        }
    }

    /// Sweeps every root named by a path-list file.
    pub async fn sweep_from(&self, list_file: &Path) -> SweepStats {
        let roots = match read_path_list(self.infra.as_ref(), list_file).await {
            Ok(roots) => roots,
            Err(error) => {
                self.infra.error(&format!(
                    "Unable to read the roots to sweep from '{}': {error:#}",
                    list_file.display()
                ));
                return SweepStats {
                    errors: 1,
                    ..Default::default()
                };
            }
        };

        let mut stats = SweepStats::default();
        for root in roots {
            stats.absorb(self.sweep_root(&root).await);
        }
        stats
    }

    /// One full sweep of the tree under `root`.
    pub async fn sweep_root(&self, root: &Path) -> SweepStats {
        let mut stats = SweepStats::default();

        let root = match self.infra.absolute(root) {
            Ok(root) => root,
            Err(error) => {
                self.infra.error(&format!("{error:#}"));
                stats.errors += 1;
                return stats;
            }
        };

        if self.config.verbose {
            self.infra
                .progress(&format!("Sweeping: '{}'", root.display()));
        }

        let cutoff = self.config.expiry_cutoff(self.infra.now());

        let scan = self.infra.find_marker_folders(&root).await;
        if let Some(message) = &scan.aborted {
            self.infra.error(&format!(
                "Scan of '{}' aborted: {message}",
                root.display()
            ));
            stats.errors += 1;
        }

        let mut candidates = Vec::new();
        for folder in &scan.folders {
            stats.folders += 1;
            self.classify_folder(folder, cutoff, &mut candidates, &mut stats)
                .await;
        }

        debug!(
            root = %root.display(),
            folders = scan.folders.len(),
            candidates = candidates.len(),
            "classification complete"
        );
        self.executor.execute(candidates, &mut stats).await;

        self.purge_emptied_folders(&scan.folders, &mut stats).await;
        stats
    }

    /// Classifies everything in one bookkeeping folder, appending deletion
    /// candidates without removing anything.
    async fn classify_folder(
        &self,
        folder: &Path,
        cutoff: DateTime<Utc>,
        candidates: &mut Vec<DeletionCandidate>,
        stats: &mut SweepStats,
    ) {
        if self.config.verbose {
            self.infra
                .progress(&format!("Found marker folder '{}'", folder.display()));
        }
        let containing = folder
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| folder.to_path_buf());
        if self.config.verbose {
            self.infra
                .progress(&format!("Containing folder '{}'", containing.display()));
        }

        let records = match self.store.records_in(folder).await {
            Ok(records) => records,
            Err(error) => {
                self.infra.error(&format!("{error:#}"));
                stats.errors += 1;
                return;
            }
        };

        if records.is_empty() {
            self.infra.progress(&format!(
                "Adding empty marker folder '{}' to the delete list",
                folder.display()
            ));
            candidates.push(DeletionCandidate::purge(
                folder.to_path_buf(),
                CandidateReason::EmptyFolder,
            ));
            return;
        }

        for record_path in records {
            self.classify_record(&record_path, &containing, cutoff, candidates, stats)
                .await;
        }
    }

    async fn classify_record(
        &self,
        record_path: &Path,
        containing: &Path,
        cutoff: DateTime<Utc>,
        candidates: &mut Vec<DeletionCandidate>,
        stats: &mut SweepStats,
    ) {
        let name = record_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        if !is_marker_file_name(&name) {
            self.infra.progress(&format!(
                "'{}' is not a legal name for a marker file - deleting",
                record_path.display()
            ));
            candidates.push(DeletionCandidate::purge(
                record_path.to_path_buf(),
                CandidateReason::MalformedName,
            ));
            return;
        }

        let modified = match self.infra.modified(record_path).await {
            Ok(modified) => modified,
            Err(error) => {
                self.infra.error(&format!("{error:#}"));
                stats.errors += 1;
                return;
            }
        };

        if modified < cutoff {
            self.infra.progress(&format!(
                "Adding expired marker file '{}' from {} to the delete list",
                record_path.display(),
                modified.format("%Y-%m-%d %H:%M:%S")
            ));
            candidates.push(DeletionCandidate::purge(
                record_path.to_path_buf(),
                CandidateReason::Expired,
            ));
            return;
        }

        if self.config.verbose {
            self.infra
                .progress(&format!("Marker file '{}'", record_path.display()));
        }

        let raw = match self.infra.read_utf8(record_path).await {
            Ok(raw) => raw,
            Err(error) => {
                self.infra.error(&format!("{error:#}"));
                stats.errors += 1;
                return;
            }
        };

        let record = match MarkerRecord::decode(&raw) {
            Ok(record) => record,
            Err(error) => {
                self.infra
                    .error(&format!("{error} in '{}'", record_path.display()));
                self.push_unreadable(record_path, candidates);
                return;
            }
        };

        let target = containing.join(&record.target_file_name);
        match record.action {
            Action::Delete => {
                let target_exists = match self.infra.exists(&target).await {
                    Ok(exists) => exists,
                    Err(error) => {
                        self.infra.error(&format!("{error:#}"));
                        stats.errors += 1;
                        return;
                    }
                };

                if !target_exists {
                    // A dangling delete record is left alone; only expiry
                    // reclaims it.
                    if self.config.verbose {
                        self.infra
                            .progress(&format!("'{}' already deleted", target.display()));
                    }
                    return;
                }

                self.infra
                    .progress(&format!("Adding '{}' to the delete list", target.display()));
                candidates.push(DeletionCandidate::target(target, record_path.to_path_buf()));
            }
            Action::Keep => {
                if self.config.verbose {
                    self.infra
                        .progress(&format!("Keeping '{}'", target.display()));
                }
                stats.kept += 1;
            }
            Action::Unrecognized(token) => {
                self.infra.error(&format!(
                    "Unrecognised action '{token}' from '{}'",
                    record_path.display()
                ));
                self.push_unreadable(record_path, candidates);
            }
        }
    }

    fn push_unreadable(&self, record_path: &Path, candidates: &mut Vec<DeletionCandidate>) {
        self.infra.progress(&format!(
            "Adding unreadable marker file '{}' to the delete list",
            record_path.display()
        ));
        candidates.push(DeletionCandidate::purge(
            record_path.to_path_buf(),
            CandidateReason::Unrecognized,
        ));
    }

    /// Folders whose last record was resolved during this pass must not
    /// persist as orphaned metadata; they are purged before the pass ends.
    async fn purge_emptied_folders(&self, folders: &[PathBuf], stats: &mut SweepStats) {
        for folder in folders {
            if !matches!(self.infra.exists(folder).await, Ok(true)) {
                continue;
            }
            let records = match self.store.records_in(folder).await {
                Ok(records) => records,
                Err(error) => {
                    self.infra.error(&format!("{error:#}"));
                    stats.errors += 1;
                    continue;
                }
            };
            if !records.is_empty() {
                continue;
            }

            self.infra.progress(&format!(
                "Purging emptied marker folder '{}'",
                folder.display()
            ));
            match self.infra.remove_all(folder).await {
                Ok(()) => stats.purged += 1,
                Err(error) => {
                    self.infra.error(&error.to_string());
                    stats.errors += 1;
                }
            }
        }
    }
}
