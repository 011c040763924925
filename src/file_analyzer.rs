//! The façade that ties a filename to a [`FileInformation`]: read, pick a
//! reader, tokenize, drive the reader, and hand back the result (or a
//! typed error that carries enough context to print a useful message).

use crate::analyzers::{selector, Reader};
use crate::core::FileInformation;
use crate::errors::AnalysisError;
use crate::tokenizer;
use crate::universal_code::UniversalCode;
use std::path::Path;

/// Reads `path`, tokenizes it, and drives the appropriate language
/// reader to completion. `count_preprocessor_conditions` corresponds to
/// the CLI's `-P`/`--no-preprocessor-count` flag (inverted: `true` means
/// `#if`/`#elif` still count toward cyclomatic complexity).
///
/// `Reader::feed` is a total function over every `(State, Token)` pair —
/// every state's `match` has a catch-all arm and `brace_count`'s only
/// decrement is guarded by the zero-check that ends the function — so
/// there is no reader transition left to reject here the way a
/// `ParsingError` would; the only failure mode below the CLI is I/O.
pub fn analyze_file(
    path: &Path,
    count_preprocessor_conditions: bool,
) -> Result<FileInformation, AnalysisError> {
    let source = std::fs::read_to_string(path).map_err(|source| AnalysisError::Io {
        file: path.to_path_buf(),
        source,
    })?;

    let language = selector::language_for(path).unwrap_or(crate::analyzers::Language::CLike);
    let mut reader = Reader::new(language, count_preprocessor_conditions);
    let mut code = UniversalCode::new();

    for token in tokenizer::tokenize(&source) {
        reader.feed(&token, &mut code);
    }

    Ok(code.into_file_information(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> tempfile::TempPath {
        let mut file = tempfile::Builder::new()
            .suffix(name)
            .tempfile()
            .expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file.into_temp_path()
    }

    #[test]
    fn analyzes_a_simple_c_file() {
        let path = write_temp(".c", "int fun(){}\n");
        let info = analyze_file(&path, true).expect("analysis should succeed");
        assert_eq!(info.function_list.len(), 1);
        assert_eq!(info.function_list[0].name, "fun");
    }

    #[test]
    fn missing_file_surfaces_io_error() {
        let err = analyze_file(Path::new("/no/such/file.c"), true).unwrap_err();
        assert!(matches!(err, AnalysisError::Io { .. }));
    }

    #[test]
    fn unrecognized_extension_falls_back_to_c_like() {
        let path = write_temp(".txt", "int fun(){}\n");
        let info = analyze_file(&path, true).expect("analysis should succeed");
        assert_eq!(info.function_list.len(), 1);
    }
}
