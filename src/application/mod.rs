// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Workflow coordination only:
//
//   generate_use_case.rs — the six-file regeneration run
//   check_use_case.rs    — recompute in memory, compare to disk
//
// Rules for this layer:
//   - No token tables or string surgery (that's Layer 4)
//   - No std::fs (go through TextStore, Layer 3 / 6)
//   - No printing (that's Layer 1)
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The regeneration workflow
pub mod generate_use_case;

// The up-to-date check workflow
pub mod check_use_case;
