// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer never touches std::fs directly. It reads
// and writes whole text files through TextStore, so the pipeline
// can run against the real filesystem (FileStore, Layer 6) or an
// in-memory map in tests.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

// ─── TextStore ────────────────────────────────────────────────────────────────
/// Whole-file text storage addressed by bare filename.
///
/// Implementations:
///   - FileStore → files under a root directory on disk
pub trait TextStore {
    /// Read the complete content of `name`.
    /// Missing or unreadable files are errors.
    fn read(&self, name: &str) -> Result<String>;

    /// Replace the complete content of `name` with `text`.
    fn write(&mut self, name: &str, text: &str) -> Result<()>;

    /// Like `read`, but a missing file is Ok(None) instead of an error.
    /// Used by the check command, where "not generated yet" is a
    /// verdict rather than a failure.
    fn read_optional(&self, name: &str) -> Result<Option<String>>;
}
