use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::layout::escape::normalize_entities;
use crate::utils::error::{BuildError, BuildResult, TemplateError};
use crate::utils::fs;

/// Marker replaced verbatim by the rendered page body
pub const CONTENT_MARKER: &str = "<%= content %>";

/// The shared page layout, loaded and normalized once per build
#[derive(Debug, Clone)]
pub struct TemplateDocument {
    path: PathBuf,
    source: String,
}

impl TemplateDocument {
    /// Load the layout at `path`.
    ///
    /// A missing file is `TemplateNotFound`, which callers treat as fatal.
    pub fn load<P: AsRef<Path>>(path: P) -> BuildResult<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(BuildError::TemplateNotFound(path.to_path_buf()));
        }

        let raw = fs::read_file(path)?;
        debug!("Loaded layout {} ({} bytes)", path.display(), raw.len());
        if !raw.contains(CONTENT_MARKER) {
            warn!(
                "Layout {} has no `{}` marker; page bodies will not appear",
                path.display(),
                CONTENT_MARKER
            );
        }

        Ok(Self::from_source(path, &raw))
    }

    pub fn from_source<P: AsRef<Path>>(path: P, raw: &str) -> Self {
        TemplateDocument {
            path: path.as_ref().to_path_buf(),
            source: normalize_entities(raw),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Normalized layout text
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// A piece of layout text after tag scanning
#[derive(Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    /// Body of a `<%= ... %>` or `<%- ... %>` tag, trimmed
    Expr(&'a str),
}

/// Split `text` into literal runs and interpolation tags.
///
/// `<%=` and `<%-` open a tag closed by `%>`; `<%%` is a literal `<%`. Any
/// other `<%` is plain text.
pub fn scan(text: &str) -> Result<Vec<Segment<'_>>, TemplateError> {
    let mut segments = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find("<%") {
        if start > 0 {
            segments.push(Segment::Literal(&rest[..start]));
        }
        let after = &rest[start + 2..];

        match after.as_bytes().first() {
            Some(b'%') => {
                segments.push(Segment::Literal("<%"));
                rest = &after[1..];
            }
            Some(b'=') | Some(b'-') => {
                let inner = &after[1..];
                let Some(end) = inner.find("%>") else {
                    let consumed = text.len() - rest.len() + start;
                    return Err(TemplateError::Syntax(format!(
                        "unterminated tag on line {}",
                        line_of(text, consumed)
                    )));
                };
                let expr = inner[..end].trim();
                if expr.is_empty() {
                    let consumed = text.len() - rest.len() + start;
                    return Err(TemplateError::Syntax(format!(
                        "empty tag on line {}",
                        line_of(text, consumed)
                    )));
                }
                segments.push(Segment::Expr(expr));
                rest = &inner[end + 2..];
            }
            _ => {
                segments.push(Segment::Literal("<%"));
                rest = after;
            }
        }
    }

    if !rest.is_empty() {
        segments.push(Segment::Literal(rest));
    }
    Ok(segments)
}

fn line_of(text: &str, byte_offset: usize) -> usize {
    text[..byte_offset].matches('\n').count() + 1
}
