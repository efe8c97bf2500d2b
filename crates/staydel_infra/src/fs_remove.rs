use std::path::Path;

use staydel_domain::{FileRemoverInfra, RemoveError};

/// Recursive removal of files and directory trees.
#[derive(Default)]
pub struct StayDelFileRemoveService;

impl StayDelFileRemoveService {
    pub fn new() -> Self {
        Self
    }
}

fn remove_error(path: &Path, source: std::io::Error) -> RemoveError {
    RemoveError {
        path: path.to_path_buf(),
        source,
    }
}

#[async_trait::async_trait]
impl FileRemoverInfra for StayDelFileRemoveService {
    async fn remove_all(&self, path: &Path) -> Result<(), RemoveError> {
        let metadata = tokio::fs::symlink_metadata(path)
            .await
            .map_err(|source| remove_error(path, source))?;

        if metadata.is_dir() {
            tokio::fs::remove_dir_all(path)
                .await
                .map_err(|source| remove_error(path, source))
        } else {
            tokio::fs::remove_file(path)
                .await
                .map_err(|source| remove_error(path, source))
        }
    }
}
