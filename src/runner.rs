//! Maps a discovered file list across a `rayon` worker pool to analysis
//! results, tolerant of per-file I/O and parsing failure (§5, §7): a
//! failing file is logged and skipped, never aborts the run.

use crate::core::FileInformation;
use crate::file_analyzer;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use std::path::PathBuf;

/// Analyzes every file in `files`, in parallel across `threads` workers
/// (`1` runs sequentially on the calling thread; rayon's default pool is
/// used when `threads` is `0`, letting it size itself to the machine).
/// Returns successful results in unspecified order relative to `files`;
/// skipped files are logged via `tracing` and excluded from the result.
pub fn analyze_all(
    files: &[PathBuf],
    count_preprocessor_conditions: bool,
    threads: usize,
) -> Vec<FileInformation> {
    let analyze_one = |path: &PathBuf| match file_analyzer::analyze_file(
        path,
        count_preprocessor_conditions,
    ) {
        Ok(info) => Some(info),
        Err(err) => {
            tracing::warn!(file = %path.display(), error = %err, "skipping file");
            None
        }
    };

    if threads == 1 {
        return files.iter().filter_map(analyze_one).collect();
    }

    match ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => pool.install(|| files.par_iter().filter_map(analyze_one).collect()),
        Err(_) => files.par_iter().filter_map(analyze_one).collect(),
    }
}
