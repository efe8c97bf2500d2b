use std::path::{Path, PathBuf};

use staydel_domain::{EnvironmentInfra, Error};

pub struct StayDelEnvironmentService;

impl EnvironmentInfra for StayDelEnvironmentService {
    fn absolute(&self, path: &Path) -> anyhow::Result<PathBuf> {
        std::path::absolute(path).map_err(|source| {
            Error::Resolve {
                path: path.to_path_buf(),
                source,
            }
            .into()
        })
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}
