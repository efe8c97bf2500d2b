use std::path::{Path, PathBuf};

use anyhow::Context;
use staydel_domain::FileReaderInfra;

/// Reads a plain list of paths: one path per line, with blank lines and
/// lines starting with `#` skipped.
pub async fn read_path_list<F: FileReaderInfra>(
    infra: &F,
    source: &Path,
) -> anyhow::Result<Vec<PathBuf>> {
    let raw = infra
        .read_utf8(source)
        .await
        .with_context(|| format!("Failed to read path list '{}'", source.display()))?;

    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(PathBuf::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_fixtures::MockInfra;

    #[tokio::test]
    async fn test_skips_blanks_and_comments() {
        let infra = MockInfra::new();
        infra.add_file(
            "/test/roots.txt",
            "/data/media\n\n# temporary\n  \n/data/downloads\n",
        );

        let actual = read_path_list(&infra, Path::new("/test/roots.txt"))
            .await
            .unwrap();

        assert_eq!(
            actual,
            vec![
                PathBuf::from("/data/media"),
                PathBuf::from("/data/downloads")
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let infra = MockInfra::new();

        let actual = read_path_list(&infra, Path::new("/test/absent.txt")).await;

        assert!(actual.is_err());
    }
}
