use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use bytes::Bytes;
use handlebars::Handlebars;
use serde::Serialize;
use staydel_domain::{
    EnvironmentInfra, FileDirectoryInfra, FileReaderInfra, FileWriterInfra, ReportSink,
};

use crate::path_list::read_path_list;

/// Wrapper emitted for each directory, so a host scheduler can run the sweep
/// with timestamps around it.
const WRAPPER_TEMPLATE: &str =
    "# AUTOGEN'D - DO NOT EDIT!\n\ndate\n\nstaydel sweep {{{directory}}}\n\ndate\n";

#[derive(Serialize)]
struct WrapperContext {
    directory: String,
}

/// Emits PowerShell wrapper scripts that sweep the directories named by the
/// given path-list files, one script per directory.
pub struct ScriptGenService<F> {
    infra: Arc<F>,
}

impl<F> ScriptGenService<F> {
    pub fn new(infra: Arc<F>) -> Self {
        Self { infra }
    }
}

impl<F> ScriptGenService<F>
where
    F: EnvironmentInfra + FileReaderInfra + FileWriterInfra + FileDirectoryInfra + ReportSink,
{
    /// Generates one script per distinct directory, in sorted order, under
    /// `<home>/autogen/staydel`. Per-directory failures are reported and do
    /// not abort the batch; returns how many failed.
    pub async fn generate(&self, lists: &[PathBuf]) -> anyhow::Result<usize> {
        let mut directories = BTreeSet::new();
        let mut failures = 0;
        for list in lists {
            match read_path_list(self.infra.as_ref(), list).await {
                Ok(paths) => directories.extend(paths),
                Err(error) => {
                    self.infra.error(&format!("{error:#}"));
                    failures += 1;
                }
            }
        }

        let home = self
            .infra
            .home_dir()
            .context("Unable to determine the home directory")?;
        let output_dir = home.join("autogen").join("staydel");
        self.infra
            .create_dirs(&output_dir)
            .await
            .with_context(|| format!("Couldn't create directory '{}'", output_dir.display()))?;

        let registry = Handlebars::new();
        for directory in directories {
            if let Err(error) = self.generate_one(&registry, &directory, &output_dir).await {
                self.infra.error(&format!("{error:#}"));
                failures += 1;
            }
        }
        Ok(failures)
    }

    async fn generate_one(
        &self,
        registry: &Handlebars<'_>,
        directory: &Path,
        output_dir: &Path,
    ) -> anyhow::Result<()> {
        self.infra.progress(&format!(
            "Generating a PowerShell wrapper script for '{}' in '{}'",
            directory.display(),
            output_dir.display()
        ));

        let context = WrapperContext {
            directory: directory.display().to_string(),
        };
        let contents = registry
            .render_template(WRAPPER_TEMPLATE, &context)
            .context("Failed to render the wrapper script template")?;

        let script_path = output_dir.join(format!("{}.ps1", script_stem(directory)));
        self.infra
            .write(&script_path, Bytes::from(contents))
            .await
            .with_context(|| format!("Unable to write script to '{}'", script_path.display()))
    }
}

/// Flattens a directory path into a single script file name stem.
fn script_stem(directory: &Path) -> String {
    directory
        .display()
        .to_string()
        .replace(":\\", "_")
        .replace(['\\', '/', ' '], "_")
}
