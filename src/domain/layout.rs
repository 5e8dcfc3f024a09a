// ============================================================
// Layer 3 — File Layout
// ============================================================
// The six filenames the generator works with. They are fixed:
// only the directory they live in can be changed (--dir).
//
//   linalgf.h  ─┐                 ┌─ linalgd.h ─┐
//               ├── derive ──────►│             ├── merge ──► linalg.h
//   linalgf.c  ─┘                 └─ linalgd.c ─┘            linalg.c
//
// Reference: Rust Book §5 (Structs)

/// Float header (input)
pub const FLOAT_HEADER: &str = "linalgf.h";

/// Float source (input)
pub const FLOAT_SOURCE: &str = "linalgf.c";

/// Double header (generated, then re-read for the merge)
pub const DOUBLE_HEADER: &str = "linalgd.h";

/// Double source (generated, then re-read for the merge)
pub const DOUBLE_SOURCE: &str = "linalgd.c";

/// Combined header (final output)
pub const COMBINED_HEADER: &str = "linalg.h";

/// Combined source (final output)
pub const COMBINED_SOURCE: &str = "linalg.c";

/// Every file the generator writes, in write order.
pub const GENERATED_FILES: [&str; 4] = [
    DOUBLE_HEADER,
    DOUBLE_SOURCE,
    COMBINED_HEADER,
    COMBINED_SOURCE,
];
