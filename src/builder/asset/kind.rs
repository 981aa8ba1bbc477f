use std::path::Path;

use glob_match::glob_match;
use serde::{Deserialize, Serialize};

/// A class of static files sharing one output subfolder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssetKind {
    /// Human readable name, used in logs
    pub name: String,

    /// File extensions without the leading dot
    pub extensions: Vec<String>,

    /// Output subfolder below the destination root
    pub directory: String,
}

impl AssetKind {
    pub fn new(name: &str, extensions: &[&str], directory: &str) -> Self {
        AssetKind {
            name: name.to_string(),
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
            directory: directory.to_string(),
        }
    }

    /// Extensions with surrounding whitespace and leading dots removed.
    ///
    /// A list written as `jpg, png, gif` yields `jpg`, `png`, `gif`.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.extensions
            .iter()
            .map(|e| e.trim().trim_start_matches('.'))
            .filter(|e| !e.is_empty())
    }

    /// Recursive glob selecting this kind, e.g. `**/*.{jpg,png,gif}`
    pub fn pattern(&self) -> String {
        let exts: Vec<&str> = self.extensions().collect();
        match exts.as_slice() {
            [single] => format!("**/*.{}", single),
            _ => format!("**/*.{{{}}}", exts.join(",")),
        }
    }

    /// Whether a `/`-separated path relative to the source root belongs to this kind
    pub fn matches(&self, relative_path: &str) -> bool {
        glob_match(&self.pattern(), relative_path)
    }

    /// Find the kind owning `path`'s extension
    pub fn classify<'a, P: AsRef<Path>>(kinds: &'a [AssetKind], path: P) -> Option<&'a AssetKind> {
        let ext = path.as_ref().extension()?.to_str()?;
        kinds.iter().find(|kind| kind.extensions().any(|e| e == ext))
    }
}
