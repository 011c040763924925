//! `cymetric` CLI entry point: parse arguments, discover files, analyze
//! them in parallel, print a report, and exit non-zero when warnings
//! exceed the configured tolerance.

use anyhow::{Context, Result};
use cymetric::cli::{self, Cli};
use cymetric::config::AnalysisConfig;
use cymetric::observability::init_tracing;
use cymetric::reporters::summary::{collect_warnings, RunSummary};
use cymetric::reporters::{tabular, warnings, xml};
use cymetric::{discovery, runner};
use std::path::PathBuf;

fn main() -> Result<()> {
    init_tracing();
    let cli = cli::parse_args();
    let exit_code = run(cli)?;
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<i32> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(".cymetric.toml"));
    let config = AnalysisConfig::load(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?
        .with_overrides(
            cli.ccn,
            cli.arguments,
            cli.no_preprocessor_count,
            cli.exclude.clone(),
            cli.threads,
            cli.find_duplicates,
        );

    let files = discovery::discover_all(&cli.paths, &config.exclude, config.find_duplicates);
    tracing::info!(count = files.len(), "discovered source files");

    let results = runner::analyze_all(
        &files,
        config.count_preprocessor_conditions,
        config.threads,
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if cli.xml {
        xml::write_xml(&mut out, &results)?;
    } else if cli.warnings_only {
        warnings::write_warnings(&mut out, &results, &config)?;
    } else {
        tabular::write_report(&mut out, &results, &config, cli.verbose)?;
    }

    let warning_count = collect_warnings(&results, &config).len();
    if RunSummary::compute(&results, warning_count).within_tolerance(cli.ignore_warnings) {
        Ok(0)
    } else {
        Ok(1)
    }
}
