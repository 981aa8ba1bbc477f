mod builder;
pub mod report;

pub use builder::{build_site, clean_site, rebuild_site};
pub use report::BuildReport;
