// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types describing what the generator works with:
//
//   rule.rs    — Rule / RuleSet, the ordered literal replacements
//   layout.rs  — the six fixed filenames
//   traits.rs  — TextStore, the whole-file storage seam
//
// Rules for this layer:
//   - NO file I/O
//   - NO knowledge of which tokens get replaced (that's Layer 4)
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Literal replacement rules and ordered rule sets
pub mod rule;

// Fixed input/output filenames
pub mod layout;

// Core abstractions that other layers implement
pub mod traits;
