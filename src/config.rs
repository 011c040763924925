//! Layered configuration: CLI flags over an optional `.cymetric.toml`.
//!
//! Mirrors the teacher crate's `config.rs` shape (a serde-deserializable
//! struct with `#[serde(default = "...")]` per field and a hand-written
//! `Default` matching the same constants) but scoped to the handful of
//! knobs this tool actually has: thresholds, the preprocessor-counting
//! toggle, exclude globs, worker count, and duplicate detection.

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_ccn_threshold() -> u32 {
    15
}

fn default_parameter_threshold() -> u32 {
    100
}

fn default_count_preprocessor_conditions() -> bool {
    true
}

fn default_threads() -> usize {
    1
}

/// Analysis-wide settings, loadable from `.cymetric.toml` and overridable
/// by CLI flags. Field names match the original tool's flag names so a
/// config file reads like a saved command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_ccn_threshold")]
    pub ccn_threshold: u32,

    #[serde(default = "default_parameter_threshold")]
    pub parameter_threshold: u32,

    #[serde(default = "default_count_preprocessor_conditions")]
    pub count_preprocessor_conditions: bool,

    #[serde(default)]
    pub exclude: Vec<String>,

    #[serde(default = "default_threads")]
    pub threads: usize,

    #[serde(default)]
    pub find_duplicates: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            ccn_threshold: default_ccn_threshold(),
            parameter_threshold: default_parameter_threshold(),
            count_preprocessor_conditions: default_count_preprocessor_conditions(),
            exclude: Vec::new(),
            threads: default_threads(),
            find_duplicates: false,
        }
    }
}

impl AnalysisConfig {
    /// Loads a config file if `path` exists, otherwise returns the
    /// default. A present-but-unparseable file is an error: silently
    /// ignoring a malformed config would surprise whoever wrote it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::InvalidFile {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Folds CLI overrides onto a loaded config. `None` means "the flag
    /// was not passed"; only `Some` values win over the file/default.
    #[allow(clippy::too_many_arguments)]
    pub fn with_overrides(
        mut self,
        ccn_threshold: Option<u32>,
        parameter_threshold: Option<u32>,
        no_preprocessor_count: bool,
        extra_exclude: Vec<String>,
        threads: Option<usize>,
        find_duplicates: bool,
    ) -> Self {
        if let Some(ccn) = ccn_threshold {
            self.ccn_threshold = ccn;
        }
        if let Some(params) = parameter_threshold {
            self.parameter_threshold = params;
        }
        if no_preprocessor_count {
            self.count_preprocessor_conditions = false;
        }
        self.exclude.extend(extra_exclude);
        if let Some(t) = threads {
            self.threads = t;
        }
        if find_duplicates {
            self.find_duplicates = true;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_matches_historical_thresholds() {
        let config = AnalysisConfig::default();
        assert_eq!(config.ccn_threshold, 15);
        assert_eq!(config.parameter_threshold, 100);
        assert!(config.count_preprocessor_conditions);
        assert_eq!(config.threads, 1);
    }

    #[test]
    fn missing_file_yields_default() {
        let config = AnalysisConfig::load(Path::new("/no/such/.cymetric.toml")).unwrap();
        assert_eq!(config, AnalysisConfig::default());
    }

    #[test]
    fn loads_partial_overrides_from_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ccn_threshold = 20\nexclude = [\"vendor/*\"]").unwrap();
        let config = AnalysisConfig::load(file.path()).unwrap();
        assert_eq!(config.ccn_threshold, 20);
        assert_eq!(config.parameter_threshold, 100);
        assert_eq!(config.exclude, vec!["vendor/*".to_string()]);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ccn_threshold = \"not a number\"").unwrap();
        let err = AnalysisConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFile { .. }));
    }

    #[test]
    fn cli_overrides_win_over_file() {
        let config = AnalysisConfig::default().with_overrides(
            Some(30),
            None,
            true,
            vec!["*.gen.c".to_string()],
            Some(4),
            true,
        );
        assert_eq!(config.ccn_threshold, 30);
        assert_eq!(config.parameter_threshold, 100);
        assert!(!config.count_preprocessor_conditions);
        assert_eq!(config.exclude, vec!["*.gen.c".to_string()]);
        assert_eq!(config.threads, 4);
        assert!(config.find_duplicates);
    }
}
