use std::io;
use std::path::{Path, PathBuf};

/// Common result type for mdpress operations
pub type BuildResult<T> = Result<T, BuildError>;

/// Errors raised while interpolating metadata into the layout
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// A placeholder refers to a key the page does not define
    #[error("missing template key `{0}`")]
    MissingKey(String),

    /// Unterminated tag or an expression the engine rejects
    #[error("template syntax error: {0}")]
    Syntax(String),

    /// The expression parsed but could not be evaluated against the page
    #[error("failed to evaluate `{expr}`: {message}")]
    Render { expr: String, message: String },
}

/// Error types for mdpress operations
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// File missing, unreadable or unwritable
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed front matter
    #[error("parse error in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// The page could not be merged into the layout
    #[error("template error in {}: {source}", path.display())]
    Template {
        path: PathBuf,
        #[source]
        source: TemplateError,
    },

    /// The shared layout is absent; aborts the whole build
    #[error("layout template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// The worker pool could not be started
    #[error("worker pool error: {0}")]
    Pool(String),
}

impl BuildError {
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        BuildError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn parse(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        BuildError::Parse {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    pub fn template(path: impl AsRef<Path>, source: TemplateError) -> Self {
        BuildError::Template {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
