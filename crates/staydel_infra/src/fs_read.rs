use std::path::Path;

use anyhow::Result;
use staydel_domain::FileReaderInfra;

use crate::fs::StayDelFS;

/// Low-level file read service.
#[derive(Default)]
pub struct StayDelFileReadService;

impl StayDelFileReadService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl FileReaderInfra for StayDelFileReadService {
    async fn read_utf8(&self, path: &Path) -> Result<String> {
        StayDelFS::read_utf8(path).await
    }
}
