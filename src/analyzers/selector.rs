//! Maps a source file's extension to the [`Language`] whose reader
//! should drive its token stream. C, C++, and Java share one reader
//! since none of the metrics this crate computes depend on the finer
//! points that tell them apart; Objective-C gets the specialized one.

use super::Language;
use std::path::Path;

const C_LIKE_EXTENSIONS: &[&str] = &[
    "c", "cpp", "cc", "cxx", "h", "hpp", "hxx", "mm", "java",
];
const OBJC_EXTENSIONS: &[&str] = &["m"];

/// Returns the reader to use for `path`, or `None` if the extension is
/// not one this crate recognizes as source at all.
pub fn language_for(path: &Path) -> Option<Language> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    if OBJC_EXTENSIONS.contains(&ext.as_str()) {
        Some(Language::ObjectiveC)
    } else if C_LIKE_EXTENSIONS.contains(&ext.as_str()) {
        Some(Language::CLike)
    } else {
        None
    }
}

/// Whether `path` is recognized as an analyzable source file, used by
/// file discovery to decide what to walk into an analysis run.
pub fn is_source_file(path: &Path) -> bool {
    language_for(path).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn recognizes_c_like_extensions() {
        for ext in ["c", "cpp", "cc", "cxx", "h", "hpp", "java", "mm"] {
            let p = PathBuf::from(format!("a.{ext}"));
            assert_eq!(language_for(&p), Some(Language::CLike), "{ext}");
        }
    }

    #[test]
    fn recognizes_objective_c_extension() {
        assert_eq!(language_for(&PathBuf::from("a.m")), Some(Language::ObjectiveC));
    }

    #[test]
    fn is_case_insensitive() {
        assert_eq!(language_for(&PathBuf::from("a.C")), Some(Language::CLike));
    }

    #[test]
    fn rejects_unknown_extensions() {
        assert_eq!(language_for(&PathBuf::from("a.py")), None);
        assert!(!is_source_file(&PathBuf::from("a.py")));
    }

    #[test]
    fn rejects_extensionless_files() {
        assert_eq!(language_for(&PathBuf::from("Makefile")), None);
    }
}
