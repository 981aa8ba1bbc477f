use std::path::PathBuf;

use crate::builder::asset::AssetKind;

/// Configuration file names looked up in the working directory
pub const CONFIG_FILES: [&str; 2] = ["mdpress.yml", "mdpress.yaml"];

/// Default source directory
pub fn default_source() -> PathBuf {
    PathBuf::from("src")
}

/// Default destination directory
pub fn default_destination() -> PathBuf {
    PathBuf::from("dist")
}

/// Default layout, relative to the source directory
pub fn default_layout() -> PathBuf {
    PathBuf::from("layouts").join("layout.html")
}

/// Default pages directory, relative to the source directory
pub fn default_pages_dir() -> PathBuf {
    PathBuf::from("pages")
}

/// Default glob for page sources, relative to the pages directory
pub fn default_page_pattern() -> String {
    "**/*.md".to_string()
}

/// Default asset kinds: styles, scripts and images
pub fn default_asset_kinds() -> Vec<AssetKind> {
    vec![
        AssetKind::new("style", &["css"], "css"),
        AssetKind::new("script", &["js"], "js"),
        AssetKind::new("image", &["jpg", "png", "gif"], "img"),
    ]
}
