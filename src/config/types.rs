use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::builder::asset::AssetKind;
use crate::config::defaults;

/// Build configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Source root holding layouts, pages and assets
    #[serde(default = "defaults::default_source")]
    pub source: PathBuf,

    /// Output root
    #[serde(default = "defaults::default_destination")]
    pub destination: PathBuf,

    /// Shared layout, relative to the source root
    #[serde(default = "defaults::default_layout")]
    pub layout: PathBuf,

    /// Page directory, relative to the source root
    #[serde(default = "defaults::default_pages_dir")]
    pub pages_dir: PathBuf,

    /// Glob selecting page sources below the page directory
    #[serde(default = "defaults::default_page_pattern")]
    pub page_pattern: String,

    /// Static asset kinds copied into output subfolders
    #[serde(default = "defaults::default_asset_kinds")]
    pub assets: Vec<AssetKind>,

    /// Worker threads; `None` uses one per CPU
    #[serde(default)]
    pub jobs: Option<usize>,

    /// Treat any per-file failure as a failed build
    #[serde(default)]
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: defaults::default_source(),
            destination: defaults::default_destination(),
            layout: defaults::default_layout(),
            pages_dir: defaults::default_pages_dir(),
            page_pattern: defaults::default_page_pattern(),
            assets: defaults::default_asset_kinds(),
            jobs: None,
            strict: false,
        }
    }
}

impl Config {
    /// Full path of the shared layout
    pub fn layout_path(&self) -> PathBuf {
        self.source.join(&self.layout)
    }

    /// Full path of the page directory
    pub fn pages_path(&self) -> PathBuf {
        self.source.join(&self.pages_dir)
    }

    /// Number of worker threads to run the build with
    pub fn worker_count(&self) -> usize {
        self.jobs.unwrap_or_else(num_cpus::get).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = Config::default();
        assert_eq!(config.layout_path(), PathBuf::from("src/layouts/layout.html"));
        assert_eq!(config.pages_path(), PathBuf::from("src/pages"));
        assert_eq!(config.destination, PathBuf::from("dist"));
        assert_eq!(config.assets.len(), 3);
        assert!(config.worker_count() >= 1);
    }

    #[test]
    fn test_partial_yaml_takes_defaults() {
        let config: Config = serde_yaml::from_str("destination: public\njobs: 2\n").unwrap();
        assert_eq!(config.destination, PathBuf::from("public"));
        assert_eq!(config.source, PathBuf::from("src"));
        assert_eq!(config.worker_count(), 2);
        assert!(!config.strict);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let parsed: Result<Config, _> = serde_yaml::from_str("destinaton: public\n");
        assert!(parsed.is_err());
    }
}
