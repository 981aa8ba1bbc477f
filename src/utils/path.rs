use std::path::{Component, Path, PathBuf};

/// Normalize a path, resolving ".." and "." components
pub fn normalize_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut result = PathBuf::new();

    for component in path.as_ref().components() {
        match component {
            Component::ParentDir => {
                if !result.as_os_str().is_empty() {
                    result.pop();
                }
            }
            Component::CurDir => {}
            _ => result.push(component),
        }
    }

    result
}

/// Get file extension as a string (the part after the last dot)
pub fn get_extension<P: AsRef<Path>>(path: P) -> Option<String> {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_string())
}

/// Base name up to its first dot: `pages/a/jquery.min.js` gives `jquery`
pub fn output_stem<P: AsRef<Path>>(path: P) -> String {
    let name = path
        .as_ref()
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match name.split_once('.') {
        Some((stem, _)) => stem.to_string(),
        None => name,
    }
}

/// Flattened destination: `<root>/<stem>.<extension>`, source directories dropped
pub fn flattened_output<P: AsRef<Path>, R: AsRef<Path>>(input: P, root: R, extension: &str) -> PathBuf {
    root.as_ref()
        .join(format!("{}.{}", output_stem(input), extension))
}

/// Path of `path` below `base` with `/` separators, for glob matching
pub fn relative_slash_path<P: AsRef<Path>, B: AsRef<Path>>(path: P, base: B) -> Option<String> {
    let relative = path.as_ref().strip_prefix(base.as_ref()).ok()?;
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}

/// Whether `inner` lies inside (or is) `outer`, compared after normalization
pub fn is_within<P: AsRef<Path>, Q: AsRef<Path>>(inner: P, outer: Q) -> bool {
    normalize_path(inner).starts_with(normalize_path(outer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_stem_cuts_at_first_dot() {
        assert_eq!(output_stem("pages/a/b/note.md"), "note");
        assert_eq!(output_stem("js/jquery.min.js"), "jquery");
        assert_eq!(output_stem("README"), "README");
    }

    #[test]
    fn test_flattened_output_discards_directories() {
        assert_eq!(
            flattened_output("src/pages/a/b/note.md", "dist", "html"),
            PathBuf::from("dist/note.html")
        );
        assert_eq!(
            flattened_output("src/theme/img/logo.png", "dist/img", "png"),
            PathBuf::from("dist/img/logo.png")
        );
    }

    #[test]
    fn test_relative_slash_path() {
        assert_eq!(
            relative_slash_path("src/theme/css/site.css", "src"),
            Some("theme/css/site.css".to_string())
        );
        assert_eq!(relative_slash_path("elsewhere/x.css", "src"), None);
    }

    #[test]
    fn test_is_within() {
        assert!(is_within("./src/dist", "src"));
        assert!(is_within("src/a/../dist", "src"));
        assert!(!is_within("dist", "src"));
    }
}
