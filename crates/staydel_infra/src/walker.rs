use std::path::{Path, PathBuf};

use anyhow::Context;
use async_recursion::async_recursion;
use staydel_domain::{MARKER_FOLDER_NAME, ScanOutcome, WalkerInfra};
use tracing::debug;

use crate::fs::StayDelFS;

/// Depth-first discovery of bookkeeping folders.
///
/// A matching directory is yielded as a leaf: the walk records it but never
/// enters it, and symlinks are not followed. An unreadable entry stops the
/// walk for that root, keeping the folders already found.
#[derive(Default)]
pub struct StayDelWalkerService;

impl StayDelWalkerService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl WalkerInfra for StayDelWalkerService {
    async fn find_marker_folders(&self, root: &Path) -> ScanOutcome {
        let mut folders = Vec::new();

        // A root that is itself a bookkeeping folder is a leaf.
        if root
            .file_name()
            .is_some_and(|name| name == MARKER_FOLDER_NAME)
            && StayDelFS::is_dir(root)
        {
            folders.push(root.to_path_buf());
            return ScanOutcome {
                folders,
                aborted: None,
            };
        }

        let aborted = match walk_into(root, &mut folders).await {
            Ok(()) => None,
            Err(error) => Some(format!("{error:#}")),
        };
        debug!(root = %root.display(), found = folders.len(), "scan finished");
        ScanOutcome { folders, aborted }
    }
}

#[async_recursion]
async fn walk_into(dir: &Path, found: &mut Vec<PathBuf>) -> anyhow::Result<()> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .with_context(|| format!("Failed to read dir {}", dir.display()))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .with_context(|| format!("Failed to read dir {}", dir.display()))?
    {
        let file_type = entry
            .file_type()
            .await
            .with_context(|| format!("Failed to stat {}", entry.path().display()))?;
        if !file_type.is_dir() {
            continue;
        }

        if entry.file_name() == MARKER_FOLDER_NAME {
            found.push(entry.path());
        } else {
            walk_into(&entry.path(), found).await?;
        }
    }
    Ok(())
}
