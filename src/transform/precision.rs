// ============================================================
// Layer 4 — Float → Double Derivation
// ============================================================
// Produces linalgd.h / linalgd.c from linalgf.h / linalgf.c by
// renaming every token that encodes single precision.
//
// Rule blocks, applied in this order:
//
//   header                     source
//   ──────────────────────     ──────────────────────
//   1. include guard           1. include directive
//   2. scalar keyword          2. scalar keyword
//   3. type names              3. type names
//   4. function affixes        4. function affixes
//   5. capitalised types       5. namespace prefixes
//   6. namespace prefixes      6. source-internal names
//
// The header gets the capitalised block; the source does not.
// The source gets the internal-name block; the header does not.
// The blocks and their order must stay exactly as they are:
// changing either changes the generated files.

use crate::domain::rule::{Rule, RuleSet};

// ─── Rule blocks ──────────────────────────────────────────────────────────────

const HEADER_GUARD: &[Rule] = &[Rule::new("LINALGF_H", "LINALGD_H")];

const SOURCE_INCLUDE: &[Rule] = &[Rule::new("linalgf.h", "linalgd.h")];

// NOTE: plain substring replacement over the whole file. Any
// "float" inside a comment, string literal or longer identifier
// (e.g. "floating", "to_float") is rewritten as well. The input
// sources are written so this never matters; it is NOT filtered
// here, the output has to match the established generator.
const SCALAR: &[Rule] = &[Rule::new("float", "double")];

const TYPE_NAMES: &[Rule] = &[
    Rule::new("mat2f", "mat2d"),
    Rule::new("mat3f", "mat3d"),
    Rule::new("mat4f", "mat4d"),
    Rule::new("vec2f", "vec2d"),
    Rule::new("vec3f", "vec3d"),
    Rule::new("vec4f", "vec4d"),
    Rule::new("cpxf", "cpxd"),
];

// Identifiers carry the precision marker as a prefix (v2f_add)
// or a suffix (mat_v2f), so both forms are listed.
const FUNCTION_AFFIXES: &[Rule] = &[
    Rule::new("v2f_", "v2d_"),
    Rule::new("v3f_", "v3d_"),
    Rule::new("v4f_", "v4d_"),
    Rule::new("_v2f", "_v2d"),
    Rule::new("_v3f", "_v3d"),
    Rule::new("_v4f", "_v4d"),
    Rule::new("m2f_", "m2d_"),
    Rule::new("m3f_", "m3d_"),
    Rule::new("m4f_", "m4d_"),
    Rule::new("_m2f", "_m2d"),
    Rule::new("_m3f", "_m3d"),
    Rule::new("_m4f", "_m4d"),
];

// There is no Vec4f in the header.
const CAPITALISED_TYPES: &[Rule] = &[
    Rule::new("Vec2f", "Vec2d"),
    Rule::new("Vec3f", "Vec3d"),
    Rule::new("Mat2f", "Mat2d"),
    Rule::new("Mat3f", "Mat3d"),
    Rule::new("Mat4f", "Mat4d"),
];

const NAMESPACES: &[Rule] = &[
    Rule::new("linalgf_", "linalgd_"),
    Rule::new("linsolverf", "linsolverd"),
];

const SOURCE_INTERNALS: &[Rule] = &[
    Rule::new("find_leading_order_f", "find_leading_order_d"),
    Rule::new("linear_solver_base_f", "linear_solver_base_d"),
    Rule::new("det2f", "det2d"),
    Rule::new("det3f", "det3d"),
];

// ─── Rule sets ────────────────────────────────────────────────────────────────

/// Ordered rules turning linalgf.h into linalgd.h
pub fn header_rules() -> RuleSet {
    RuleSet::from_blocks(
        "header",
        &[
            HEADER_GUARD,
            SCALAR,
            TYPE_NAMES,
            FUNCTION_AFFIXES,
            CAPITALISED_TYPES,
            NAMESPACES,
        ],
    )
}

/// Ordered rules turning linalgf.c into linalgd.c
pub fn source_rules() -> RuleSet {
    RuleSet::from_blocks(
        "source",
        &[
            SOURCE_INCLUDE,
            SCALAR,
            TYPE_NAMES,
            FUNCTION_AFFIXES,
            NAMESPACES,
            SOURCE_INTERNALS,
        ],
    )
}

// ─── Derivation ───────────────────────────────────────────────────────────────

/// Derive the double-precision header text from the float header text.
pub fn derive_double_header(float_header: &str) -> String {
    derive_with(&header_rules(), float_header)
}

/// Derive the double-precision source text from the float source text.
pub fn derive_double_source(float_source: &str) -> String {
    derive_with(&source_rules(), float_source)
}

/// Run a rule set, logging per-rule hit counts at debug level.
/// A rule with zero hits is not an error; the token simply
/// doesn't appear in this file.
fn derive_with(rules: &RuleSet, text: &str) -> String {
    let (out, hits) = rules.apply_traced(text);

    for h in &hits {
        tracing::debug!(
            "[{}] {:?} -> {:?}: {} replaced",
            rules.name,
            h.rule.from,
            h.rule.to,
            h.hits
        );
    }

    let total: usize = hits.iter().map(|h| h.hits).sum();
    let unused = hits.iter().filter(|h| h.hits == 0).count();
    tracing::debug!(
        "[{}] {} replacements, {} of {} rules unused",
        rules.name,
        total,
        unused,
        rules.len()
    );

    out
}
