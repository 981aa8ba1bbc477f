use std::path::PathBuf;

use crate::front_matter::Metadata;

/// A page source as read from disk
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub path: PathBuf,
    pub metadata: Metadata,
    pub raw_body: String,
}

/// A page body converted to HTML, ready for the layout
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub path: PathBuf,
    pub html: String,
    pub metadata: Metadata,
    pub output_path: PathBuf,
}
