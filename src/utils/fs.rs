use std::fs;
use std::path::Path;

use log::debug;

use crate::utils::error::{BuildError, BuildResult};

/// Create a directory and any parent directories if they don't exist
pub fn create_directory<P: AsRef<Path>>(path: P) -> BuildResult<()> {
    fs::create_dir_all(path.as_ref()).map_err(|e| BuildError::io(path.as_ref(), e))
}

/// Remove a directory and all its contents
pub fn remove_directory<P: AsRef<Path>>(path: P) -> BuildResult<bool> {
    let path = path.as_ref();
    if !path.is_dir() {
        return Ok(false);
    }
    fs::remove_dir_all(path).map_err(|e| BuildError::io(path, e))?;
    Ok(true)
}

/// Read a file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> BuildResult<String> {
    fs::read_to_string(path.as_ref()).map_err(|e| BuildError::io(path.as_ref(), e))
}

/// Read a file as raw bytes
pub fn read_bytes<P: AsRef<Path>>(path: P) -> BuildResult<Vec<u8>> {
    fs::read(path.as_ref()).map_err(|e| BuildError::io(path.as_ref(), e))
}

/// Write `contents` to `path`, creating parent directories first.
///
/// Existing files are overwritten. The bytes land on disk exactly as given.
pub fn write_file<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> BuildResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_directory(parent)?;
        }
    }

    let contents = contents.as_ref();
    fs::write(path, contents).map_err(|e| BuildError::io(path, e))?;
    debug!("Wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_parents_and_round_trips() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("a/b/c/page.html");
        let html = "<p>héllo<br />\nworld</p>\n";

        write_file(&target, html).unwrap();

        assert_eq!(fs::read(&target).unwrap(), html.as_bytes());
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("note.html");

        write_file(&target, "first").unwrap();
        write_file(&target, "second").unwrap();
        // Parent already exists: still fine
        write_file(&target, [0u8, 159, 146, 150]).unwrap();

        assert_eq!(fs::read(&target).unwrap(), vec![0u8, 159, 146, 150]);
    }

    #[test]
    fn test_write_into_file_path_fails_with_io() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a dir").unwrap();

        let err = write_file(blocker.join("page.html"), "x").unwrap_err();
        assert!(matches!(err, BuildError::Io { .. }));
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = read_file(dir.path().join("missing.md")).unwrap_err();
        match err {
            BuildError::Io { path, .. } => assert!(path.ends_with("missing.md")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_remove_directory() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("dist");
        write_file(out.join("css/site.css"), "body{}").unwrap();

        assert!(remove_directory(&out).unwrap());
        assert!(!out.exists());
        assert!(!remove_directory(&out).unwrap());
    }
}
