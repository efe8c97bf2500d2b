use std::fmt;

use serde::{Deserialize, Serialize};

/// Disposition recorded for a file by a mark operation.
///
/// Any token other than the two recognized keywords survives parsing
/// verbatim so the sweep can report it and purge the record that carried it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Delete,
    Keep,
    Unrecognized(String),
}

impl Action {
    pub fn parse(token: &str) -> Self {
        match token {
            "delete" => Action::Delete,
            "keep" => Action::Keep,
            other => Action::Unrecognized(other.to_string()),
        }
    }

    /// The keyword written into a marker record.
    pub fn keyword(&self) -> &str {
        match self {
            Action::Delete => "delete",
            Action::Keep => "keep",
            Action::Unrecognized(token) => token,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
