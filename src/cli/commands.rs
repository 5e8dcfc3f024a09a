// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Three subcommands:
//
//   generate — (default) regenerate the four derived files
//   check    — report derived files that don't match their inputs
//   rules    — print the ordered replacement tables as JSON
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand, ValueEnum};

use crate::application::generate_use_case::GenerateConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write linalgd.h, linalgd.c, linalg.h and linalg.c from linalgf.h / linalgf.c
    Generate,

    /// Exit non-zero if any generated file is missing or out of date (writes nothing)
    Check,

    /// Print the replacement rules in application order
    Rules(RulesArgs),
}

/// Which rule table(s) `rules` prints
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleTable {
    Header,
    Source,
    Merge,
    All,
}

#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Rule table to print
    #[arg(long, value_enum, default_value_t = RuleTable::All)]
    pub set: RuleTable,
}

/// Arguments shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Directory holding linalgf.h / linalgf.c; outputs are written next to them
    #[arg(long, global = true, default_value = ".")]
    pub dir: String,

    /// Log every rule application (same as RUST_LOG=linalgd_gen=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// The application layer never sees clap types.
impl From<&CommonArgs> for GenerateConfig {
    fn from(a: &CommonArgs) -> Self {
        GenerateConfig { dir: a.dir.clone() }
    }
}
