use std::path::Path;

use bytes::Bytes;
use staydel_domain::FileWriterInfra;

use crate::fs::StayDelFS;

/// Low-level file write service with truncating overwrite semantics.
#[derive(Default)]
pub struct StayDelFileWriteService;

impl StayDelFileWriteService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl FileWriterInfra for StayDelFileWriteService {
    async fn write(&self, path: &Path, contents: Bytes) -> anyhow::Result<()> {
        StayDelFS::write(path, contents.to_vec()).await
    }
}
