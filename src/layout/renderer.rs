use std::collections::HashSet;

use lazy_static::lazy_static;
use liquid::model::Value;
use liquid::Parser;
use log::debug;
use regex::Regex;

use crate::builder::page::RenderedPage;
use crate::front_matter::Metadata;
use crate::layout::escape::normalize_entities;
use crate::layout::template::{scan, Segment, TemplateDocument, CONTENT_MARKER};
use crate::liquid::{create_parser, key_string, mapping_to_object};
use crate::utils::error::TemplateError;

lazy_static! {
    // Leading variable of an expression: `author` in `author.name | upcase`
    static ref ROOT_KEY_REGEX: Regex = Regex::new(r"^([A-Za-z_][A-Za-z0-9_-]*)").unwrap();
}

/// Binding holding the rendered page body
const CONTENT_KEY: &str = "content";

/// Merges a page's body and metadata into the shared layout
pub struct LayoutRenderer {
    parser: Parser,
}

impl LayoutRenderer {
    pub fn new() -> Result<Self, TemplateError> {
        Ok(LayoutRenderer {
            parser: create_parser()?,
        })
    }

    /// Render `page` into `template`
    pub fn render(&self, template: &TemplateDocument, page: &RenderedPage) -> Result<String, TemplateError> {
        self.render_normalized(template.source(), &page.html, &page.metadata)
    }

    /// Render from raw layout text; the layout is normalized first
    #[cfg(test)]
    pub fn render_str(&self, template: &str, html: &str, metadata: &Metadata) -> Result<String, TemplateError> {
        self.render_normalized(&normalize_entities(template), html, metadata)
    }

    fn render_normalized(&self, template: &str, html: &str, metadata: &Metadata) -> Result<String, TemplateError> {
        let content = normalize_entities(html);

        // Stage 1: the body goes in verbatim wherever the marker appears
        let combined = template.replace(CONTENT_MARKER, &content);

        // Stage 2: every remaining tag is evaluated against the metadata
        let mut globals = mapping_to_object(metadata);
        globals.insert(CONTENT_KEY.into(), Value::scalar(content));

        let mut known: HashSet<String> = metadata.keys().filter_map(key_string).collect();
        known.insert(CONTENT_KEY.to_string());

        let mut output = String::with_capacity(combined.len());
        for segment in scan(&combined)? {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Expr(expr) => output.push_str(&self.evaluate(expr, &globals, &known)?),
            }
        }

        Ok(normalize_entities(&output))
    }

    fn evaluate(&self, expr: &str, globals: &liquid::Object, known: &HashSet<String>) -> Result<String, TemplateError> {
        if expr.contains("{{") || expr.contains("}}") {
            return Err(TemplateError::Syntax(format!("braces are not allowed in `{}`", expr)));
        }
        if let Some(missing) = referenced_keys(expr).into_iter().find(|key| !known.contains(*key)) {
            return Err(TemplateError::MissingKey(missing.to_string()));
        }

        let template = self
            .parser
            .parse(&format!("{{{{ {} }}}}", expr))
            .map_err(|e| TemplateError::Syntax(format!("invalid expression `{}`: {}", expr, e)))?;

        template.render(globals).map_err(|e| {
            debug!("Error evaluating `{}`: {}", expr, e);
            TemplateError::Render {
                expr: expr.to_string(),
                message: e.to_string(),
            }
        })
    }
}

/// Root variables an expression reads: the value it starts from and every
/// filter argument, e.g. `title` and `suffix` in `title | append: suffix`.
fn referenced_keys(expr: &str) -> Vec<&str> {
    let mut parts = split_unquoted(expr, '|').into_iter();
    let mut keys: Vec<&str> = parts.next().and_then(root_key).into_iter().collect();

    for filter in parts {
        let Some((_, args)) = filter.split_once(':') else {
            continue;
        };
        for arg in split_unquoted(args, ',') {
            // Named arguments: `default: fallback, allow_false: flag`
            let value = match arg.split_once(':') {
                Some((name, value)) if root_key(name).is_some() => value.trim(),
                _ => arg,
            };
            keys.extend(root_key(value));
        }
    }
    keys
}

/// Split on `sep` outside single or double quoted strings, trimming each piece
fn split_unquoted(text: &str, sep: char) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (i, c) in text.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '\'' || c == '"' => quote = Some(c),
            None if c == sep => {
                pieces.push(text[start..i].trim());
                start = i + c.len_utf8();
            }
            None => {}
        }
    }
    pieces.push(text[start..].trim());
    pieces
}

/// Variable an expression starts from, if it starts from one
fn root_key(expr: &str) -> Option<&str> {
    let root = ROOT_KEY_REGEX.captures(expr.trim())?.get(1)?.as_str();
    // Liquid literals, not variables
    match root {
        "true" | "false" | "nil" | "null" | "empty" | "blank" => None,
        _ => Some(root),
    }
}
