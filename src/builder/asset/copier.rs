use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::WalkDir;

use crate::builder::asset::AssetKind;
use crate::utils::error::BuildResult;
use crate::utils::fs;
use crate::utils::path::{flattened_output, get_extension, is_within, relative_slash_path};

/// A static file relayed verbatim into the output tree
#[derive(Debug, Clone)]
pub struct StaticAsset {
    pub path: PathBuf,
    pub extension: String,
    pub kind: String,
    pub output_path: PathBuf,
}

impl StaticAsset {
    /// Place `path` under `<destination>/<kind.directory>/`, base name flattened
    pub fn new(path: &Path, kind: &AssetKind, destination: &Path) -> Option<Self> {
        let extension = get_extension(path)?;
        let output_path = flattened_output(path, destination.join(&kind.directory), &extension);
        Some(StaticAsset {
            path: path.to_path_buf(),
            extension,
            kind: kind.name.clone(),
            output_path,
        })
    }
}

/// Find every file under `source` matching one of `kinds`, sorted by path.
///
/// `destination` is skipped when it lies inside the source tree so a
/// rebuild never picks up its own output.
pub fn discover_assets(source: &Path, destination: &Path, kinds: &[AssetKind]) -> Vec<StaticAsset> {
    let skip_destination = is_within(destination, source);
    let mut assets = Vec::new();

    let walker = WalkDir::new(source)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !(skip_destination && is_within(e.path(), destination)));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", source.display(), e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Some(relative) = relative_slash_path(path, source) else {
            continue;
        };

        let kind = AssetKind::classify(kinds, path).filter(|kind| kind.matches(&relative));
        if let Some(kind) = kind {
            if let Some(asset) = StaticAsset::new(path, kind, destination) {
                debug!("Found {} asset {}", kind.name, relative);
                assets.push(asset);
            }
        }
    }

    assets.sort_by(|a, b| a.path.cmp(&b.path));
    assets
}

/// Copy one asset to its output location, returning the bytes written
pub fn copy_asset(asset: &StaticAsset) -> BuildResult<u64> {
    let contents = fs::read_bytes(&asset.path)?;
    fs::write_file(&asset.output_path, &contents)?;
    Ok(contents.len() as u64)
}
