use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Utc};
use staydel_domain::FileInfoInfra;

use crate::fs::StayDelFS;

pub struct StayDelFileMetaService;

#[async_trait::async_trait]
impl FileInfoInfra for StayDelFileMetaService {
    async fn exists(&self, path: &Path) -> Result<bool> {
        Ok(StayDelFS::exists(path))
    }

    async fn is_dir(&self, path: &Path) -> Result<bool> {
        Ok(StayDelFS::is_dir(path))
    }

    async fn modified(&self, path: &Path) -> Result<DateTime<Utc>> {
        Ok(DateTime::<Utc>::from(StayDelFS::modified(path).await?))
    }
}
