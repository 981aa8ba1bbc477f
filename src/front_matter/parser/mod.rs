use serde_yaml::Value;

use crate::front_matter::{split_front_matter, Metadata};

/// Parse `content` into its metadata and Markdown body.
///
/// An absent or empty block yields empty metadata. Invalid YAML, an
/// unterminated block, or a block that is not a mapping is an error.
pub fn parse(content: &str) -> Result<(Metadata, String), String> {
    let (block, body) = split_front_matter(content)?;

    let metadata = match block {
        Some(block) => parse_block(block)?,
        None => Metadata::new(),
    };

    Ok((metadata, body.to_string()))
}

fn parse_block(block: &str) -> Result<Metadata, String> {
    if block.trim().is_empty() {
        return Ok(Metadata::new());
    }

    let value: Value = serde_yaml::from_str(block)
        .map_err(|e| format!("invalid front matter: {}", e))?;

    match value {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Metadata::new()),
        other => Err(format!(
            "front matter must be a mapping of keys to values, found {}",
            describe(&other)
        )),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
