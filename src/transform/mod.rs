// ============================================================
// Layer 4 — Text Transforms
// ============================================================
// Pure String → String functions. No file access here; the
// application layer reads inputs and writes outputs.
//
//   linalgf.h ──► derive_double_header ──► linalgd.h
//   linalgf.c ──► derive_double_source ──► linalgd.c
//
//   (linalgf.h, linalgd.h) ──► merge_headers ──► linalg.h
//   (linalgf.c, linalgd.c) ──► merge_sources ──► linalg.c
//
// Reference: Rust Book §8 (Strings in Rust)

/// Float → double token renaming
pub mod precision;

/// Concatenation of the float/double pairs
pub mod merge;
