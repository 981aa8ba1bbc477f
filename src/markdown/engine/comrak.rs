use comrak::Options;

/// Comrak options for page bodies.
///
/// Headings get no generated anchor ids, a single newline inside a
/// paragraph renders as a hard `<br />`, and raw HTML passes through.
pub fn create_comrak_options<'a>() -> Options<'a> {
    let mut options = Options::default();

    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.header_ids = None;

    options.render.hardbreaks = true;
    options.render.unsafe_ = true;

    options
}

/// Render markdown to HTML using Comrak
pub fn render_markdown(content: &str, options: &Options) -> String {
    ::comrak::markdown_to_html(content, options)
}
