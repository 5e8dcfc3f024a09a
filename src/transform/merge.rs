// ============================================================
// Layer 4 — Merge
// ============================================================
// Joins each float/double pair into one combined file.
//
//   linalg.h = linalgf.h + linalgd.h          (verbatim)
//
//   linalg.c = PREAMBLE
//            + (linalgf.c + linalgd.c with the per-variant
//               header includes and <assert.h> removed)
//
// The removals are whole-line literal matches including the
// trailing "\n". FileStore hands over LF-only text, so CRLF
// sources are stripped the same way.

use crate::domain::layout::COMBINED_HEADER;
use crate::domain::rule::{Rule, RuleSet};

const STRIP_INCLUDES: &[Rule] = &[
    Rule::new("#include \"linalgf.h\"\n", ""),
    Rule::new("#include \"linalgd.h\"\n", ""),
    Rule::new("#include <assert.h>\n", ""),
];

/// Cleanup rules applied to the concatenated sources
pub fn merge_rules() -> RuleSet {
    RuleSet::from_blocks("merge", &[STRIP_INCLUDES])
}

/// Lines put at the very top of linalg.c
pub fn source_preamble() -> String {
    format!("#include \"{COMBINED_HEADER}\"\n#include <assert.h>\n")
}

/// Float header followed directly by the double header.
/// No separator is inserted.
pub fn merge_headers(float_header: &str, double_header: &str) -> String {
    let mut out = String::with_capacity(float_header.len() + double_header.len());
    out.push_str(float_header);
    out.push_str(double_header);
    out
}

/// Float source followed by double source, minus their own
/// includes, under a single preamble.
pub fn merge_sources(float_source: &str, double_source: &str) -> String {
    let joined = merge_headers(float_source, double_source);
    let body   = merge_rules().apply(&joined);

    let mut out = source_preamble();
    out.push_str(&body);
    out
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_headers_is_plain_concatenation() {
        assert_eq!(merge_headers("A\n", "B\n"), "A\nB\n");
        // no separator is added when the first text lacks a newline
        assert_eq!(merge_headers("A", "B"), "AB");
        assert_eq!(merge_headers("", "B"), "B");
    }

    #[test]
    fn test_merge_sources_strips_includes() {
        let f = "#include \"linalgf.h\"\n#include <assert.h>\nvoid f(void) {}\n";
        let d = "#include \"linalgd.h\"\n#include <assert.h>\nvoid d(void) {}\n";

        let out = merge_sources(f, d);
        assert_eq!(
            out,
            "#include \"linalg.h\"\n#include <assert.h>\nvoid f(void) {}\nvoid d(void) {}\n"
        );
        assert!(!out.contains("linalgf.h"));
        assert!(!out.contains("linalgd.h"));
        assert_eq!(out.matches("#include <assert.h>\n").count(), 1);
    }

    #[test]
    fn test_merge_sources_keeps_other_includes() {
        let out = merge_sources("#include <math.h>\nint a;\n", "int b;\n");
        assert_eq!(
            out,
            "#include \"linalg.h\"\n#include <assert.h>\n#include <math.h>\nint a;\nint b;\n"
        );
    }

    #[test]
    fn test_merge_sources_without_includes_only_prepends() {
        assert_eq!(
            merge_sources("", ""),
            "#include \"linalg.h\"\n#include <assert.h>\n"
        );
    }

    #[test]
    fn test_crlf_sources_stripped_after_store_read() {
        use crate::domain::traits::TextStore;
        use crate::infra::file_store::FileStore;
        use std::fs;
        use tempfile::TempDir;

        let dir = TempDir::new().expect("failed to create temp dir");
        fs::write(
            dir.path().join("linalgf.c"),
            "#include \"linalgf.h\"\r\n#include <assert.h>\r\nint a;\r\n",
        )
        .unwrap();
        fs::write(dir.path().join("linalgd.c"), "#include \"linalgd.h\"\r\nint b;\r\n").unwrap();

        let store = FileStore::new(dir.path());
        let out   = merge_sources(
            &store.read("linalgf.c").unwrap(),
            &store.read("linalgd.c").unwrap(),
        );

        assert_eq!(out, "#include \"linalg.h\"\n#include <assert.h>\nint a;\nint b;\n");
        assert_eq!(out.matches("#include").count(), 2);
    }
}
