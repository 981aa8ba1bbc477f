//! Liquid expression engine used to evaluate layout placeholders.

mod yaml;

use liquid::{Parser, ParserBuilder};

use crate::utils::error::TemplateError;

pub use yaml::{key_string, mapping_to_object};

/// Create the parser that evaluates placeholder expressions.
///
/// The standard library filters are available, so a placeholder may read
/// `<%= title | upcase %>`.
pub fn create_parser() -> Result<Parser, TemplateError> {
    ParserBuilder::with_stdlib()
        .build()
        .map_err(|e| TemplateError::Syntax(format!("failed to set up template engine: {}", e)))
}
