//! Fixed-column text report: `nloc CCN token param function@line@file`,
//! one row per function, a warnings section, and a totals row — the
//! original tool's default output shape.

use super::summary::{collect_warnings, RunSummary};
use crate::config::AnalysisConfig;
use crate::core::{FileInformation, FunctionInfo};
use std::io::{self, Write};

const HEADER: &str = "  NLOC    CCN   token  param  function@line@file";
const RULE: &str = "------------------------------------------------";

/// Writes the full tabular report (header, per-function rows, warnings,
/// totals) to `out`. `verbose` substitutes `long_name` for `name` in the
/// function column, matching the original's `-v` flag.
pub fn write_report(
    out: &mut dyn Write,
    files: &[FileInformation],
    config: &AnalysisConfig,
    verbose: bool,
) -> io::Result<()> {
    writeln!(out, "{HEADER}")?;
    writeln!(out, "{RULE}")?;

    for file in files {
        for function in &file.function_list {
            write_function_row(out, file, function, verbose)?;
        }
    }

    writeln!(out, "{RULE}")?;

    let warnings = collect_warnings(files, config);
    if !warnings.is_empty() {
        writeln!(out, "\n===== Warnings =====")?;
        for warning in &warnings {
            writeln!(
                out,
                "{}:{}: warning: {} has {} CCN and {} params ({} NLOC, {} tokens)",
                warning.file.display(),
                warning.function.start_line,
                warning.function.name,
                warning.function.cyclomatic_complexity,
                warning.function.parameter_count,
                warning.function.nloc,
                warning.function.token_count,
            )?;
        }
    }

    let summary = RunSummary::compute(files, warnings.len());
    write_totals(out, &summary)?;
    Ok(())
}

fn write_function_row(
    out: &mut dyn Write,
    file: &FileInformation,
    function: &FunctionInfo,
    verbose: bool,
) -> io::Result<()> {
    let name = if verbose {
        &function.long_name
    } else {
        &function.name
    };
    writeln!(
        out,
        "{:>6} {:>6} {:>7} {:>6}  {}@{}@{}",
        function.nloc,
        function.cyclomatic_complexity,
        function.token_count,
        function.parameter_count,
        name,
        function.start_line,
        file.filename.display(),
    )
}

fn write_totals(out: &mut dyn Write, summary: &RunSummary) -> io::Result<()> {
    writeln!(
        out,
        "\nTotal nloc  Avg.NLOC  AvgCCN  Avg.token  Fun Cnt  Warning cnt"
    )?;
    writeln!(
        out,
        "{:>10}  {:>8.1}  {:>6.1}  {:>9.1}  {:>7}  {:>11}",
        summary.total_nloc,
        summary.average_nloc,
        summary.average_ccn,
        summary.average_token,
        summary.function_count,
        summary.warning_count,
    )
}
