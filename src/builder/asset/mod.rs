mod kind;
mod copier;

pub use kind::AssetKind;
pub use copier::{StaticAsset, discover_assets, copy_asset};
