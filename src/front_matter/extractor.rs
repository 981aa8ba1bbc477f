/// Fence line opening and closing a front matter block
pub const FENCE: &str = "---";

/// Split `content` into its raw front matter block and body.
///
/// The block must start on the first line (a leading BOM is ignored) with a
/// line that is exactly `---`, and ends at the next such line. The body is
/// everything after the closing fence line. Content without an opening
/// fence has no block and is all body.
pub fn split_front_matter(content: &str) -> Result<(Option<&str>, &str), String> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let Some(rest) = strip_fence_line(content) else {
        return Ok((None, content));
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if is_fence(line) {
            let block = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Ok((Some(block), body));
        }
        offset += line.len();
    }

    Err(format!("missing closing `{}` delimiter", FENCE))
}

fn strip_fence_line(content: &str) -> Option<&str> {
    let first_len = content.find('\n').map(|i| i + 1).unwrap_or(content.len());
    if is_fence(&content[..first_len]) {
        Some(&content[first_len..])
    } else {
        None
    }
}

fn is_fence(line: &str) -> bool {
    line.trim_end_matches(['\r', '\n']) == FENCE
}
