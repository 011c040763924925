//! Command-line surface: a flat set of flags (no subcommands — this
//! tool has exactly one mode of operation), matching the original's
//! `lizard`-style argument names where one exists.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cymetric")]
#[command(about = "Source-code complexity analyzer for C, C++, Objective-C and Java", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Paths to analyze (files or directories); defaults to the current directory.
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// CCN warning threshold.
    #[arg(short = 'C', long = "ccn")]
    pub ccn: Option<u32>,

    /// Parameter-count warning threshold.
    #[arg(short = 'a', long = "arguments")]
    pub arguments: Option<u32>,

    /// Print only the warnings section, in `file:line: warning: ...` form.
    #[arg(short = 'w', long = "warnings-only")]
    pub warnings_only: bool,

    /// Exit 0 if the warning count is at or below N.
    #[arg(short = 'i', long = "ignore-warnings", default_value = "0")]
    pub ignore_warnings: usize,

    /// Exclude files matching this glob (repeatable).
    #[arg(short = 'x', long = "exclude")]
    pub exclude: Vec<String>,

    /// Emit a cppncss-compatible XML report instead of the tabular one.
    #[arg(short = 'X', long = "xml")]
    pub xml: bool,

    /// Disable `#if`/`#elif` contributing to cyclomatic complexity.
    #[arg(short = 'P', long = "no-preprocessor-count")]
    pub no_preprocessor_count: bool,

    /// Worker-pool size for parallel file analysis.
    #[arg(short = 't', long = "threads")]
    pub threads: Option<usize>,

    /// Skip files whose content hash duplicates one already seen.
    #[arg(short = 'd', long = "find-duplicates")]
    pub find_duplicates: bool,

    /// Print long (qualified) function signatures instead of short names.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Path to a `.cymetric.toml` config file (defaults to `./.cymetric.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_is_current_directory() {
        let cli = Cli::parse_from(["cymetric"]);
        assert_eq!(cli.paths, vec![PathBuf::from(".")]);
        assert_eq!(cli.ignore_warnings, 0);
        assert!(!cli.xml);
    }

    #[test]
    fn parses_thresholds_and_flags() {
        let cli = Cli::parse_from([
            "cymetric", "-C", "20", "-a", "5", "-w", "-X", "-P", "-d", "-v", "src",
        ]);
        assert_eq!(cli.ccn, Some(20));
        assert_eq!(cli.arguments, Some(5));
        assert!(cli.warnings_only);
        assert!(cli.xml);
        assert!(cli.no_preprocessor_count);
        assert!(cli.find_duplicates);
        assert!(cli.verbose);
        assert_eq!(cli.paths, vec![PathBuf::from("src")]);
    }

    #[test]
    fn exclude_is_repeatable() {
        let cli = Cli::parse_from(["cymetric", "-x", "vendor/*", "-x", "*.gen.c"]);
        assert_eq!(cli.exclude, vec!["vendor/*".to_string(), "*.gen.c".to_string()]);
    }
}
