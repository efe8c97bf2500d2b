use std::sync::Arc;

use staydel_domain::{DeletionCandidate, FileRemoverInfra, ReportSink, SweepStats};
use tracing::debug;

/// Performs the deletions a sweep classified, tolerating per-candidate
/// failures. Nothing here is ever fatal to the batch and nothing already
/// removed is rolled back.
pub struct DeletionExecutor<F> {
    infra: Arc<F>,
}

impl<F> DeletionExecutor<F> {
    pub fn new(infra: Arc<F>) -> Self {
        Self { infra }
    }
}

impl<F: FileRemoverInfra + ReportSink> DeletionExecutor<F> {
    /// Removes every candidate in order.
    ///
    /// A candidate carrying its originating marker record has the record
    /// removed as well: on success because the record is resolved, on failure
    /// so that later sweeps stop retrying a target that cannot be removed.
    pub async fn execute(&self, candidates: Vec<DeletionCandidate>, stats: &mut SweepStats) {
        for candidate in candidates {
            let mut line = format!("Deleting '{}'", candidate.path.display());
            if let Some(marker) = &candidate.marker {
                line.push_str(&format!(" as instructed by '{}'", marker.display()));
            }
            self.infra.progress(&line);

            match self.infra.remove_all(&candidate.path).await {
                Ok(()) => {
                    debug!(path = %candidate.path.display(), reason = %candidate.reason, "removed");
                    if candidate.reason.is_purge() {
                        stats.purged += 1;
                    } else {
                        stats.deleted += 1;
                    }
                    if let Some(marker) = &candidate.marker {
                        self.purge_marker(marker, stats).await;
                    }
                }
                Err(error) => {
                    self.infra.error(&error.to_string());
                    stats.errors += 1;

                    if let Some(marker) = &candidate.marker {
                        self.infra.error(&format!(
                            "Failed to remove '{}' - removing the marker record '{}'",
                            error.path.display(),
                            marker.display()
                        ));
                        self.purge_marker(marker, stats).await;
                    }
                }
            }
        }
    }

    async fn purge_marker(&self, marker: &std::path::Path, stats: &mut SweepStats) {
        match self.infra.remove_all(marker).await {
            Ok(()) => stats.purged += 1,
            Err(error) => {
                self.infra.error(&error.to_string());
                stats.errors += 1;
            }
        }
    }
}
