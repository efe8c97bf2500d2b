use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Why a path ended up on a sweep's deletion list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display,
)]
#[strum(serialize_all = "kebab-case")]
pub enum CandidateReason {
    /// The target of a delete record.
    MarkedDelete,
    /// A record whose name does not match the marker identity format.
    MalformedName,
    /// A record older than the expiry threshold.
    Expired,
    /// A record whose action token is not recognized.
    Unrecognized,
    /// A bookkeeping folder with no records left in it.
    EmptyFolder,
}

impl CandidateReason {
    /// Whether this candidate removes bookkeeping rather than a user file.
    pub fn is_purge(&self) -> bool {
        !matches!(self, CandidateReason::MarkedDelete)
    }
}

/// One entry on a sweep's deletion list. Lives only for the duration of a
/// single sweep pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionCandidate {
    pub path: PathBuf,
    /// The record that authorized deleting `path`, when one did. Lets the
    /// executor report the authorizing marker and fall back to purging it
    /// alone when the target itself cannot be removed.
    pub marker: Option<PathBuf>,
    pub reason: CandidateReason,
}

impl DeletionCandidate {
    pub fn target(path: PathBuf, marker: PathBuf) -> Self {
        Self {
            path,
            marker: Some(marker),
            reason: CandidateReason::MarkedDelete,
        }
    }

    pub fn purge(path: PathBuf, reason: CandidateReason) -> Self {
        Self {
            path,
            marker: None,
            reason,
        }
    }
}

/// Bookkeeping folders discovered under one root.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    pub folders: Vec<PathBuf>,
    /// Set when the walk stopped early on an unreadable entry. Folders found
    /// before the failure are still present and still get swept.
    pub aborted: Option<String>,
}

impl ScanOutcome {
    pub fn aborted(message: impl Into<String>) -> Self {
        Self {
            folders: Vec::new(),
            aborted: Some(message.into()),
        }
    }
}

/// Counters for one sweep pass, or an aggregation of passes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepStats {
    /// Bookkeeping folders visited.
    pub folders: usize,
    /// User files or directories removed on a delete record's instruction.
    pub deleted: usize,
    /// Marker records and empty bookkeeping folders removed.
    pub purged: usize,
    /// Files left alone on a keep record's instruction.
    pub kept: usize,
    /// Failures reported to the error sink.
    pub errors: usize,
}

impl SweepStats {
    pub fn absorb(&mut self, other: SweepStats) {
        self.folders += other.folders;
        self.deleted += other.deleted;
        self.purged += other.purged;
        self.kept += other.kept;
        self.errors += other.errors;
    }

    /// Whether the run finished without any reported error.
    pub fn is_clean(&self) -> bool {
        self.errors == 0
    }
}
