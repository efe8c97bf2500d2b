use std::path::Path;

use staydel_domain::FileDirectoryInfra;

use crate::fs::StayDelFS;

#[derive(Default)]
pub struct StayDelCreateDirsService;

#[async_trait::async_trait]
impl FileDirectoryInfra for StayDelCreateDirsService {
    async fn create_dirs(&self, path: &Path) -> anyhow::Result<()> {
        StayDelFS::create_dir_all(path).await
    }
}
