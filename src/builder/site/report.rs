use std::path::PathBuf;
use std::time::Duration;

use log::{debug, error, info, warn};

use crate::utils::error::BuildError;

/// One file that could not be built
#[derive(Debug)]
pub struct BuildFailure {
    pub path: PathBuf,
    pub error: BuildError,
}

/// What a single page or asset task ended with
#[derive(Debug)]
pub enum TaskOutcome {
    PageWritten { source: PathBuf, output: PathBuf },
    AssetCopied { source: PathBuf, output: PathBuf, bytes: u64 },
    Failed(BuildFailure),
}

/// Summary of a finished build
#[derive(Debug, Default)]
pub struct BuildReport {
    pub pages_written: usize,
    pub assets_copied: usize,
    pub bytes_copied: u64,
    pub failures: Vec<BuildFailure>,
    /// Page and asset sources whose flattened output was taken by a later one
    pub shadowed: Vec<PathBuf>,
    pub elapsed: Duration,
}

impl BuildReport {
    pub fn new(shadowed: Vec<PathBuf>) -> Self {
        BuildReport {
            shadowed,
            ..Default::default()
        }
    }

    pub fn record(&mut self, outcome: TaskOutcome) {
        match outcome {
            TaskOutcome::PageWritten { source, output } => {
                debug!("Built {} -> {}", source.display(), output.display());
                self.pages_written += 1;
            }
            TaskOutcome::AssetCopied { source, output, bytes } => {
                debug!("Copied {} -> {}", source.display(), output.display());
                self.assets_copied += 1;
                self.bytes_copied += bytes;
            }
            TaskOutcome::Failed(failure) => {
                error!("{}", failure.error);
                self.failures.push(failure);
            }
        }
    }

    /// True when every discovered file was built
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn log_summary(&self) {
        info!(
            "Wrote {} pages and {} assets ({} bytes) in {:.2?}",
            self.pages_written, self.assets_copied, self.bytes_copied, self.elapsed
        );
        if !self.shadowed.is_empty() {
            warn!(
                "{} file(s) were shadowed by a later file with the same output name:",
                self.shadowed.len()
            );
            for path in &self.shadowed {
                warn!("  {}", path.display());
            }
        }
        if !self.is_clean() {
            warn!("{} file(s) failed to build:", self.failures.len());
            for failure in &self.failures {
                warn!("  {}", failure.path.display());
            }
        }
    }
}
