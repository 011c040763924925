//! Warnings-only output: one `file:line: warning: ...` line per
//! over-threshold function, clang/gcc-style — the `-w` flag's report.

use super::summary::collect_warnings;
use crate::config::AnalysisConfig;
use crate::core::FileInformation;
use std::io::{self, Write};

pub fn write_warnings(
    out: &mut dyn Write,
    files: &[FileInformation],
    config: &AnalysisConfig,
) -> io::Result<usize> {
    let warnings = collect_warnings(files, config);
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
    Ok(warnings.len())
}
