//! Error types for the parsing core and its ambient collaborators.
//!
//! Mirrors the teacher crate's layered error design: small `thiserror`
//! enums per concern, with `anyhow` reserved for the CLI boundary where
//! rich ad-hoc context is more useful than a typed variant.

use std::path::PathBuf;

/// Raised when a language reader's state machine cannot make sense of
/// the token stream (this should be rare — the readers are permissive
/// by design — but it guards against tokenizer/reader desyncs).
#[derive(Debug, thiserror::Error)]
#[error("{}", render_parsing_error(.file, *.line, .source_excerpt))]
pub struct ParsingError {
    pub file: PathBuf,
    pub line: usize,
    pub source_excerpt: String,
}

const BUG_REPORTING: &str =
    "please report this to the project issue tracker with the file that triggered it.";

fn render_parsing_error(file: &PathBuf, line: usize, source: &str) -> String {
    let snippet = source.lines().nth(line.saturating_sub(1)).unwrap_or("");
    format!(
        "!!!Exception Happens!!!\nAt {}:{}: '{}'\nIf possible, {}",
        file.display(),
        line,
        snippet,
        BUG_REPORTING
    )
}

impl ParsingError {
    pub fn new(file: PathBuf, line: usize, source_excerpt: impl Into<String>) -> Self {
        Self {
            file,
            line,
            source_excerpt: source_excerpt.into(),
        }
    }
}

/// Top-level error for anything that can go wrong analyzing one file.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Parsing(#[from] ParsingError),

    #[error("could not read {}: {source}\nIf you think this is a bug, {}", .file.display(), BUG_REPORTING)]
    Io {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors building or validating [`crate::config::AnalysisConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration file {}: {source}", .path.display())]
    InvalidFile {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("could not read configuration file {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
