//! Front matter: the `---` fenced YAML block at the top of a page.

pub mod extractor;
pub mod parser;

/// Page metadata, keyed by front matter field name, in document order
pub type Metadata = serde_yaml::Mapping;

pub use extractor::split_front_matter;
pub use parser::parse;
