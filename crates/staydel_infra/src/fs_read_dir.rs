use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use staydel_domain::DirectoryReaderInfra;

pub struct StayDelDirectoryReadService;

#[async_trait::async_trait]
impl DirectoryReaderInfra for StayDelDirectoryReadService {
    async fn list_files(&self, directory: &Path) -> Result<Vec<PathBuf>> {
        let mut entries = tokio::fs::read_dir(directory)
            .await
            .with_context(|| format!("Failed to read dir {}", directory.display()))?;

        let mut files = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .with_context(|| format!("Failed to read dir {}", directory.display()))?
        {
            let file_type = entry
                .file_type()
                .await
                .with_context(|| format!("Failed to stat {}", entry.path().display()))?;
            if file_type.is_file() {
                files.push(entry.path());
            }
        }
        files.sort();
        Ok(files)
    }
}
