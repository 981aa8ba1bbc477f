use std::path::Path;

use comrak::Options;
use log::debug;

use crate::builder::page::model::{RenderedPage, SourceDocument};
use crate::builder::page::utils::determine_output_path;
use crate::front_matter;
use crate::markdown::render_markdown;
use crate::utils::error::{BuildError, BuildResult};
use crate::utils::fs;

/// Read a page source and split off its front matter
pub fn read_source(path: &Path) -> BuildResult<SourceDocument> {
    let content = fs::read_file(path)?;
    let (metadata, raw_body) = front_matter::parse(&content).map_err(|e| BuildError::parse(path, e))?;

    debug!("Read {} ({} metadata keys)", path.display(), metadata.len());
    Ok(SourceDocument {
        path: path.to_path_buf(),
        metadata,
        raw_body,
    })
}

impl SourceDocument {
    /// Convert the body to HTML and place the page under `destination`
    pub fn render(self, destination: &Path, options: &Options) -> RenderedPage {
        let html = render_markdown(&self.raw_body, options);
        let output_path = determine_output_path(&self.path, destination);
        RenderedPage {
            path: self.path,
            html,
            metadata: self.metadata,
            output_path,
        }
    }
}

/// Read and convert a page in one step
pub fn read_page(path: &Path, destination: &Path, options: &Options) -> BuildResult<RenderedPage> {
    Ok(read_source(path)?.render(destination, options))
}
