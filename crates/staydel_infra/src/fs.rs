//! # StayDelFS
//!
//! A thin wrapper over tokio's filesystem operations that standardizes error
//! context in the format "Failed to [operation] [path]", preserving the
//! original error cause.

use std::path::Path;
use std::time::SystemTime;

use anyhow::{Context, Result};

/// Standardized filesystem access for the infra services.
#[derive(Debug)]
pub struct StayDelFS;

impl StayDelFS {
    pub async fn read_utf8(path: &Path) -> Result<String> {
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read file {}", path.display()))
    }

    pub async fn write(path: &Path, contents: Vec<u8>) -> Result<()> {
        tokio::fs::write(path, contents)
            .await
            .with_context(|| format!("Failed to write file {}", path.display()))
    }

    pub async fn create_dir_all(path: &Path) -> Result<()> {
        tokio::fs::create_dir_all(path)
            .await
            .with_context(|| format!("Failed to create dir {}", path.display()))
    }

    pub fn exists(path: &Path) -> bool {
        path.exists()
    }

    pub fn is_dir(path: &Path) -> bool {
        path.is_dir()
    }

    pub async fn modified(path: &Path) -> Result<SystemTime> {
        let metadata = tokio::fs::metadata(path)
            .await
            .with_context(|| format!("Failed to get metadata of {}", path.display()))?;
        metadata
            .modified()
            .with_context(|| format!("Failed to get modified time of {}", path.display()))
    }
}
