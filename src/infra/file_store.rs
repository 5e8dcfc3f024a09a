// ============================================================
// Layer 6 — File Store
// ============================================================
// TextStore backed by a directory on disk.
//
// Every operation is whole-file: fs::read_to_string / fs::write
// open, fully consume and close the file before returning, so no
// handle outlives a single call.
//
// Reads normalise line endings: "\r\n" and a lone "\r" become
// "\n". The rules downstream (the include-line strips in merge.rs)
// only ever see "\n", and every file written is LF-only.
//
// Errors are never swallowed. A missing input or an unwritable
// output aborts the run with the path in the error message.
// Files already written by an earlier step stay on disk.
//
// Reference: Rust Book §9 (Error Handling with anyhow)
//            Rust Book §12 (Reading a File)

use anyhow::{Context, Result};
use std::{
    fs,
    io::ErrorKind,
    path::PathBuf,
};

use crate::domain::traits::TextStore;

/// Reads and writes files relative to a root directory.
pub struct FileStore {
    /// Directory all filenames resolve against
    root: PathBuf,
}

impl FileStore {
    /// Create a FileStore rooted at `root`.
    /// The directory is not created; it must already hold the inputs.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Full path for a bare filename
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

/// Convert CRLF and bare CR line endings to LF.
fn to_unix_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

impl TextStore for FileStore {
    fn read(&self, name: &str) -> Result<String> {
        let path = self.path_of(name);

        let text = fs::read_to_string(&path)
            .map(to_unix_newlines)
            .with_context(|| format!("Cannot read '{}'", path.display()))?;

        tracing::info!("Read '{}' ({} bytes)", path.display(), text.len());
        Ok(text)
    }

    fn write(&mut self, name: &str, text: &str) -> Result<()> {
        let path = self.path_of(name);

        fs::write(&path, text)
            .with_context(|| format!("Cannot write '{}'", path.display()))?;

        tracing::info!("Wrote '{}' ({} bytes)", path.display(), text.len());
        Ok(())
    }

    fn read_optional(&self, name: &str) -> Result<Option<String>> {
        let path = self.path_of(name);

        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(to_unix_newlines(text))),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("'{}' does not exist", path.display());
                Ok(None)
            }
            Err(e) => Err(e).with_context(|| format!("Cannot read '{}'", path.display())),
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read() {
        let dir       = TempDir::new().expect("failed to create temp dir");
        let mut store = FileStore::new(dir.path());

        store.write("linalgd.h", "#define X 1\n").unwrap();
        assert_eq!(store.read("linalgd.h").unwrap(), "#define X 1\n");
        assert!(dir.path().join("linalgd.h").exists());
    }

    #[test]
    fn test_write_overwrites_whole_file() {
        let dir       = TempDir::new().expect("failed to create temp dir");
        let mut store = FileStore::new(dir.path());

        store.write("linalg.c", "a much longer first version\n").unwrap();
        store.write("linalg.c", "short\n").unwrap();
        assert_eq!(store.read("linalg.c").unwrap(), "short\n");
    }

    #[test]
    fn test_missing_file_error_names_path() {
        let dir   = TempDir::new().expect("failed to create temp dir");
        let store = FileStore::new(dir.path());

        let err = store.read("linalgf.h").unwrap_err();
        assert!(format!("{err}").contains("linalgf.h"));
    }

    #[test]
    fn test_read_optional_missing_is_none() {
        let dir   = TempDir::new().expect("failed to create temp dir");
        let store = FileStore::new(dir.path());

        assert_eq!(store.read_optional("linalg.h").unwrap(), None);
    }

    #[test]
    fn test_crlf_and_cr_read_as_lf() {
        let dir       = TempDir::new().expect("failed to create temp dir");
        let mut store = FileStore::new(dir.path());

        fs::write(dir.path().join("linalgf.c"), "a;\r\nb;\rc;\n").unwrap();
        assert_eq!(store.read("linalgf.c").unwrap(), "a;\nb;\nc;\n");
        assert_eq!(
            store.read_optional("linalgf.c").unwrap().as_deref(),
            Some("a;\nb;\nc;\n")
        );

        // what goes out is exactly what was passed in
        store.write("linalgd.c", "x;\n").unwrap();
        assert_eq!(fs::read(dir.path().join("linalgd.c")).unwrap(), b"x;\n");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir       = TempDir::new().expect("failed to create temp dir");
        let mut store = FileStore::new(dir.path().join("does-not-exist"));

        assert!(store.write("linalgd.h", "x").is_err());
    }
}
