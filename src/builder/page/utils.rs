use std::path::{Path, PathBuf};

use crate::utils::path::flattened_output;

/// Extension of every rendered page
pub const PAGE_EXTENSION: &str = "html";

/// Output path for a page: `<destination>/<stem>.html`.
///
/// Source subdirectories are discarded, so `pages/a/b/note.md` and
/// `pages/note.md` share one output file.
pub fn determine_output_path(input_path: &Path, destination: &Path) -> PathBuf {
    flattened_output(input_path, destination, PAGE_EXTENSION)
}
