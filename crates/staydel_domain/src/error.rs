use std::path::PathBuf;

/// Failure to remove a path, naming the path that could not be removed so
/// the executor can decide whether to purge the marker that pointed at it.
#[derive(Debug, thiserror::Error)]
#[error("Failed to remove '{}': {source}", path.display())]
pub struct RemoveError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("'{name}' is not a usable target file name")]
    InvalidTargetName { name: String },

    #[error("Unable to find the absolute path of '{}'", path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
