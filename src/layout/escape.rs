/// Undo the escaping the Markdown stage applies to HTML-ish text.
///
/// `&lt;` and `&gt;` become `<` and `>`, and a literal backslash followed
/// by `n` becomes a `<br>` tag. Applied to the layout, the page body and
/// the final output alike.
pub fn normalize_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("\\n", "<br>")
}
