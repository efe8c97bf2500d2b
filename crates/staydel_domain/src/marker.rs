use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::{Action, Error};

/// Name of the hidden bookkeeping folder kept next to marked files.
pub const MARKER_FOLDER_NAME: &str = ".stay-deleted";

lazy_static! {
    static ref MARKER_FILE_NAME: Regex =
        Regex::new(r"^[0-9a-fA-F]+\.txt$").expect("marker file name pattern");
}

/// Lowercase hex digest identifying the marker record for a file base name.
///
/// The identity is a pure function of the base name, so re-marking a file
/// overwrites its record and marking same-named files in different
/// directories produces records in different bookkeeping folders.
pub fn marker_identity(base_name: &str) -> String {
    Sha256::digest(base_name.as_bytes())
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}

/// File name of the marker record for a file base name.
pub fn marker_file_name(base_name: &str) -> String {
    format!("{}.txt", marker_identity(base_name))
}

/// Whether a directory entry name is shaped like a marker record.
pub fn is_marker_file_name(name: &str) -> bool {
    MARKER_FILE_NAME.is_match(name)
}

/// A pending disposition for one file, resolved relative to the directory
/// containing the record's bookkeeping folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerRecord {
    pub target_file_name: String,
    pub action: Action,
}

impl MarkerRecord {
    pub fn new(target_file_name: impl Into<String>, action: Action) -> Self {
        Self {
            target_file_name: target_file_name.into(),
            action,
        }
    }

    /// Two newline-terminated UTF-8 lines: target base name, then the action
    /// keyword.
    pub fn encode(&self) -> String {
        format!("{}\n{}\n", self.target_file_name, self.action.keyword())
    }

    /// Reads the two-line record format.
    ///
    /// An unknown action token decodes into [`Action::Unrecognized`] so the
    /// sweep can classify it; the only decode failure is a first line that
    /// cannot be a file base name.
    pub fn decode(raw: &str) -> Result<Self, Error> {
        let mut lines = raw.lines();
        let target = lines.next().unwrap_or_default();
        if target.is_empty() || target.contains('/') || target.contains('\\') {
            return Err(Error::InvalidTargetName {
                name: target.to_string(),
            });
        }
        let action = Action::parse(lines.next().unwrap_or_default());
        Ok(Self::new(target, action))
    }
}
