//! Cross-file aggregation shared by every reporter: which functions are
//! over threshold, and the totals row each output format prints.

use crate::config::AnalysisConfig;
use crate::core::{FileInformation, FunctionInfo};
use std::path::Path;

/// One over-threshold function, paired with the file it came from so
/// reporters can print `file:line: warning: ...` without re-threading
/// context through every call site.
pub struct Warning<'a> {
    pub file: &'a Path,
    pub function: &'a FunctionInfo,
}

/// Collects every function across `files` whose CCN or parameter count
/// exceeds `config`'s thresholds, in file order then function order
/// (source order, since `function_list` is already source-ordered).
pub fn collect_warnings<'a>(
    files: &'a [FileInformation],
    config: &AnalysisConfig,
) -> Vec<Warning<'a>> {
    let mut warnings = Vec::new();
    for file in files {
        for function in &file.function_list {
            if function.cyclomatic_complexity > config.ccn_threshold
                || function.parameter_count as u32 > config.parameter_threshold
            {
                warnings.push(Warning {
                    file: &file.filename,
                    function,
                });
            }
        }
    }
    warnings
}

/// Totals and averages across an entire run, used for the totals row in
/// tabular output and for deciding the process exit code.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub file_count: usize,
    pub function_count: usize,
    pub warning_count: usize,
    pub total_nloc: usize,
    pub average_nloc: f64,
    pub average_ccn: f64,
    pub average_token: f64,
}

impl RunSummary {
    pub fn compute(files: &[FileInformation], warning_count: usize) -> Self {
        let function_count: usize = files.iter().map(|f| f.function_list.len()).sum();
        let total_nloc: usize = files.iter().map(|f| f.nloc).sum();

        let (nloc_sum, ccn_sum, token_sum) = files.iter().flat_map(|f| &f.function_list).fold(
            (0usize, 0u32, 0usize),
            |(nloc, ccn, tok), f| {
                (
                    nloc + f.nloc,
                    ccn + f.cyclomatic_complexity,
                    tok + f.token_count,
                )
            },
        );

        let denom = function_count.max(1) as f64;
        Self {
            file_count: files.len(),
            function_count,
            warning_count,
            total_nloc,
            average_nloc: if function_count == 0 {
                0.0
            } else {
                nloc_sum as f64 / denom
            },
            average_ccn: if function_count == 0 {
                0.0
            } else {
                ccn_sum as f64 / denom
            },
            average_token: if function_count == 0 {
                0.0
            } else {
                token_sum as f64 / denom
            },
        }
    }

    /// Exit-code contract: success (true) when warnings are within the
    /// `-i`/`--ignore-warnings` tolerance.
    pub fn within_tolerance(&self, tolerance: usize) -> bool {
        self.warning_count <= tolerance
    }
}

/// Used only by the XML writer's per-file section, which reports nloc
/// alongside a bare filename string rather than a `PathBuf`.
pub fn filename_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
