pub mod asset;
pub mod page;
pub mod site;

pub use site::{build_site, clean_site, rebuild_site, BuildReport};
