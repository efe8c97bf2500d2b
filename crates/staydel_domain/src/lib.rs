//! Core types for deferred, reversible file deletion: marker records and
//! their on-disk codec, sweep configuration, deletion candidates, and the
//! infrastructure seams the services are written against.

mod action;
mod candidate;
mod config;
mod error;
mod infra;
mod marker;

pub use action::Action;
pub use candidate::{CandidateReason, DeletionCandidate, ScanOutcome, SweepStats};
pub use config::{ScheduleConfig, SweepConfig};
pub use error::{Error, RemoveError};
pub use infra::{
    ClockInfra, DirectoryReaderInfra, EnvironmentInfra, FileDirectoryInfra, FileInfoInfra,
    FileReaderInfra, FileRemoverInfra, FileWriterInfra, ReportSink, WalkerInfra,
};
pub use marker::{
    MARKER_FOLDER_NAME, MarkerRecord, is_marker_file_name, marker_file_name, marker_identity,
};
