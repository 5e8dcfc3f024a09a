// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap, routes to a use case and prints
// the result. With no subcommand the tool runs `generate` in
// the current directory.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::{bail, Result};
use clap::Parser;
use commands::{Commands, CommonArgs, RuleTable, RulesArgs};

use crate::application::generate_use_case::GenerateConfig;

#[derive(Parser, Debug)]
#[command(
    name = "linalgd-gen",
    version,
    about = "Derive the double-precision linalg sources and merge both variants into linalg.h / linalg.c."
)]
pub struct Cli {
    #[command(flatten)]
    pub common: CommonArgs,

    /// What to do (defaults to `generate`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    pub fn run(self) -> Result<()> {
        let config = GenerateConfig::from(&self.common);

        match self.command {
            None | Some(Commands::Generate) => run_generate(&config),
            Some(Commands::Check)           => run_check(&config),
            Some(Commands::Rules(args))     => run_rules(&args),
        }
    }
}

fn run_generate(config: &GenerateConfig) -> Result<()> {
    use crate::application::generate_use_case::GenerateUseCase;
    use crate::infra::file_store::FileStore;

    tracing::info!("Generating in '{}'", config.dir);

    let report = GenerateUseCase::new(FileStore::new(&config.dir)).execute()?;

    for (name, bytes) in &report.written {
        println!("wrote {name} ({bytes} bytes)");
    }
    Ok(())
}

fn run_check(config: &GenerateConfig) -> Result<()> {
    use crate::application::check_use_case::{CheckUseCase, FileStatus};
    use crate::infra::file_store::FileStore;

    let store  = FileStore::new(&config.dir);
    let report = CheckUseCase::new(&store).execute()?;

    for (name, status) in &report.files {
        let label = match status {
            FileStatus::UpToDate => "ok",
            FileStatus::Stale    => "stale",
            FileStatus::Missing  => "missing",
        };
        println!("{label:>8}  {name}");
    }

    if !report.is_clean() {
        bail!(
            "{} generated file(s) out of date: {}. Run `linalgd-gen generate`.",
            report.outdated().len(),
            report.outdated().join(", ")
        );
    }
    Ok(())
}

fn run_rules(args: &RulesArgs) -> Result<()> {
    use crate::transform::{merge::merge_rules, precision::{header_rules, source_rules}};

    let sets = match args.set {
        RuleTable::Header => vec![header_rules()],
        RuleTable::Source => vec![source_rules()],
        RuleTable::Merge  => vec![merge_rules()],
        RuleTable::All    => vec![header_rules(), source_rules(), merge_rules()],
    };

    println!("{}", serde_json::to_string_pretty(&sets)?);
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_means_generate_in_cwd() {
        let cli = Cli::try_parse_from(["linalgd-gen"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.common.dir, ".");
        assert!(!cli.common.verbose);
    }

    #[test]
    fn test_dir_is_global() {
        let cli = Cli::try_parse_from(["linalgd-gen", "check", "--dir", "debug-app"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Check)));
        assert_eq!(cli.common.dir, "debug-app");
    }

    #[test]
    fn test_rules_set_parses() {
        let cli = Cli::try_parse_from(["linalgd-gen", "rules", "--set", "source"]).unwrap();
        match cli.command {
            Some(Commands::Rules(args)) => assert_eq!(args.set, RuleTable::Source),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_rule_table_rejected() {
        assert!(Cli::try_parse_from(["linalgd-gen", "rules", "--set", "everything"]).is_err());
    }

    #[test]
    fn test_clap_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
