// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
//   file_store.rs — TextStore over a directory on disk.
//                   Whole-file reads and writes with the path
//                   attached to every error via anyhow::Context.
//
// Reference: Rust Book §9 (Error Handling with anyhow)

/// Directory-backed whole-file storage
pub mod file_store;
