use std::path::{Path, PathBuf};

use glob_match::glob_match;
use log::{debug, warn};
use walkdir::WalkDir;

use crate::utils::path::relative_slash_path;

/// Collect page sources under `pages_dir` matching `pattern`, sorted by path.
///
/// A missing page directory yields no pages.
pub fn collect_pages(pages_dir: &Path, pattern: &str) -> Vec<PathBuf> {
    if !pages_dir.is_dir() {
        warn!("Page directory {} does not exist; no pages to build", pages_dir.display());
        return Vec::new();
    }

    let mut pages: Vec<PathBuf> = WalkDir::new(pages_dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", pages_dir.display(), e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            relative_slash_path(entry.path(), pages_dir)
                .map(|relative| glob_match(pattern, &relative))
                .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();

    pages.sort();
    debug!("Collected {} pages from {}", pages.len(), pages_dir.display());
    pages
}
