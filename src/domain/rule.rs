// ============================================================
// Layer 3 — Replacement Rules
// ============================================================
// The whole generator is a fixed sequence of literal string
// replacements. This file defines the two building blocks:
//
//   Rule     — one (find, replace) pair, applied to every
//              non-overlapping occurrence, left to right
//   RuleSet  — an ordered list of rules, each one applied to
//              the output of the previous one
//
// Order matters. Several tokens are substrings of others
// (e.g. "linalgf_" vs "linalgf.h", "v2f_" vs "_v2f_"), so the
// same rules in a different order give a different result.
//
// Matching is plain substring matching, NOT token-bounded:
// "float" also matches inside "floating" or "f_float".
//
// Reference: Rust Book §8 (Strings), §13 (Iterators)

use serde::Serialize;

/// A single literal replacement.
///
/// Uses &'static str because every rule in this tool is a
/// compile-time constant; nothing is built at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rule {
    /// Literal text to search for
    pub from: &'static str,

    /// Literal text substituted for every occurrence
    pub to: &'static str,
}

impl Rule {
    /// const fn so rule tables can live in `const` slices
    pub const fn new(from: &'static str, to: &'static str) -> Self {
        Self { from, to }
    }

    /// Replace every non-overlapping occurrence of `from`.
    /// A rule that finds nothing returns the text unchanged.
    pub fn apply(&self, text: &str) -> String {
        text.replace(self.from, self.to)
    }

    /// Number of non-overlapping occurrences of `from` in `text`.
    /// Counts the same way `str::replace` scans.
    pub fn count_in(&self, text: &str) -> usize {
        if self.from.is_empty() {
            return 0;
        }
        text.matches(self.from).count()
    }
}

/// Outcome of one rule inside a traced RuleSet application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleHit {
    pub rule: Rule,
    /// How many occurrences were replaced (0 = no-op)
    pub hits: usize,
}

// ─── RuleSet ──────────────────────────────────────────────────────────────────
/// An ordered, named sequence of rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSet {
    /// Short label used in logs and in the `rules` dump
    pub name: &'static str,

    /// Rules in application order
    pub rules: Vec<Rule>,
}

impl RuleSet {
    /// Build a RuleSet by concatenating rule blocks in the given order.
    ///
    /// Example:
    ///   RuleSet::from_blocks("header", &[GUARD, SCALAR, TYPE_NAMES])
    pub fn from_blocks(name: &'static str, blocks: &[&[Rule]]) -> Self {
        let rules = blocks
            .iter()
            .flat_map(|block| block.iter().copied())
            .collect();
        Self { name, rules }
    }

    /// Apply every rule in order, feeding each one the output
    /// of the previous rule.
    pub fn apply(&self, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |buf, rule| rule.apply(&buf))
    }

    /// Same as `apply`, but also reports how many replacements each
    /// rule made. Hit counts are taken on the buffer the rule actually
    /// sees, i.e. after all earlier rules have run.
    pub fn apply_traced(&self, text: &str) -> (String, Vec<RuleHit>) {
        let mut buf  = text.to_string();
        let mut hits = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            let n = rule.count_in(&buf);
            if n > 0 {
                buf = rule.apply(&buf);
            }
            hits.push(RuleHit { rule: *rule, hits: n });
        }

        (buf, hits)
    }

    /// Number of rules in the set
    pub fn len(&self) -> usize {
        self.rules.len()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_replaces_all_occurrences() {
        let r = Rule::new("vec2f", "vec2d");
        assert_eq!(r.apply("vec2f a; vec2f b;"), "vec2d a; vec2d b;");
    }

    #[test]
    fn test_rule_absent_token_is_noop() {
        let r = Rule::new("det3f", "det3d");
        let text = "float det2f(vec2f a, vec2f b);";
        assert_eq!(r.apply(text), text);
        assert_eq!(r.count_in(text), 0);
    }

    #[test]
    fn test_rule_is_plain_substring_match() {
        // not token-bounded: "float" inside a longer word is replaced too
        let r = Rule::new("float", "double");
        assert_eq!(r.apply("/* floating point */"), "/* doubleing point */");
    }

    #[test]
    fn test_count_matches_non_overlapping() {
        let r = Rule::new("aa", "b");
        assert_eq!(r.count_in("aaaa"), 2);
        assert_eq!(r.count_in("aaa"), 1);
        assert_eq!(r.apply("aaa"), "ba");
    }

    #[test]
    fn test_ruleset_order_matters() {
        let a = Rule::new("ab", "X");
        let b = Rule::new("a", "Y");

        let ab = RuleSet::from_blocks("ab", &[&[a, b]]);
        let ba = RuleSet::from_blocks("ba", &[&[b, a]]);

        assert_eq!(ab.apply("ab a"), "X Y");
        assert_eq!(ba.apply("ab a"), "Yb Y");
    }

    #[test]
    fn test_later_rule_sees_earlier_output() {
        let set = RuleSet::from_blocks(
            "chain",
            &[&[Rule::new("one", "two"), Rule::new("two", "three")]],
        );
        assert_eq!(set.apply("one"), "three");
    }

    #[test]
    fn test_from_blocks_preserves_block_order() {
        const FIRST: &[Rule]  = &[Rule::new("a", "b")];
        const SECOND: &[Rule] = &[Rule::new("c", "d"), Rule::new("e", "f")];

        let set = RuleSet::from_blocks("x", &[FIRST, SECOND]);
        let froms: Vec<&str> = set.rules.iter().map(|r| r.from).collect();
        assert_eq!(froms, vec!["a", "c", "e"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_apply_traced_matches_apply() {
        let set = RuleSet::from_blocks(
            "t",
            &[&[Rule::new("x", "y"), Rule::new("q", "r"), Rule::new("y", "z")]],
        );
        let (out, hits) = set.apply_traced("xx y");
        assert_eq!(out, set.apply("xx y"));
        assert_eq!(out, "zz z");

        let counts: Vec<usize> = hits.iter().map(|h| h.hits).collect();
        // "y" rule sees the output of "x"→"y", so it hits 3 times
        assert_eq!(counts, vec![2, 0, 3]);
    }
}
