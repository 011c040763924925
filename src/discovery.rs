//! Finds the files an analysis run should touch: recursive directory
//! walking, extension filtering via the language selector, `-x`
//! exclusion globs, and optional content-hash duplicate suppression.

use crate::analyzers::selector;
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub struct Discovery {
    root: PathBuf,
    exclude_patterns: Vec<String>,
    find_duplicates: bool,
}

impl Discovery {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            exclude_patterns: Vec::new(),
            find_duplicates: false,
        }
    }

    pub fn with_exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.exclude_patterns = patterns;
        self
    }

    pub fn with_find_duplicates(mut self, find_duplicates: bool) -> Self {
        self.find_duplicates = find_duplicates;
        self
    }

    pub fn discover(&self) -> Vec<PathBuf> {
        let mut seen_hashes = HashSet::new();
        self.discover_into(&mut seen_hashes)
    }

    fn discover_into(&self, seen_hashes: &mut HashSet<[u8; 32]>) -> Vec<PathBuf> {
        let mut files = Vec::new();

        if self.root.is_file() {
            if self.should_include(&self.root) && self.not_duplicate(&self.root, seen_hashes) {
                files.push(self.root.clone());
            }
            return files;
        }

        for entry in WalkDir::new(&self.root)
            .into_iter()
            .filter_map(|entry| entry.ok())
        {
            let path = entry.path();
            if !path.is_file() || !self.should_include(path) {
                continue;
            }
            if self.not_duplicate(path, seen_hashes) {
                files.push(path.to_path_buf());
            }
        }

        files
    }

    fn should_include(&self, path: &Path) -> bool {
        if !selector::is_source_file(path) {
            return false;
        }
        !self.is_excluded(path)
    }

    fn is_excluded(&self, path: &Path) -> bool {
        let absolute = path.to_string_lossy();
        let relative = path.strip_prefix(&self.root).unwrap_or(path).to_string_lossy();

        self.exclude_patterns.iter().any(|pattern| {
            glob::Pattern::new(pattern)
                .map(|glob_pattern| {
                    glob_pattern.matches(&absolute) || glob_pattern.matches(&relative)
                })
                .unwrap_or(false)
        })
    }

    fn not_duplicate(&self, path: &Path, seen_hashes: &mut HashSet<[u8; 32]>) -> bool {
        if !self.find_duplicates {
            return true;
        }
        let Ok(contents) = std::fs::read(path) else {
            return true;
        };
        let hash: [u8; 32] = Sha256::digest(&contents).into();
        seen_hashes.insert(hash)
    }
}

/// Discovers files across every root path the CLI was given, in order,
/// sharing one duplicate-hash set across all of them when requested.
pub fn discover_all(roots: &[PathBuf], exclude: &[String], find_duplicates: bool) -> Vec<PathBuf> {
    let mut seen_hashes = HashSet::new();
    let mut all = Vec::new();

    for root in roots {
        let discovery = Discovery::new(root.clone())
            .with_exclude_patterns(exclude.to_vec())
            .with_find_duplicates(find_duplicates);
        all.extend(discovery.discover_into(&mut seen_hashes));
    }

    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn project() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_path_buf();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::create_dir_all(root.join("vendor")).unwrap();
        fs::write(root.join("src/main.c"), "int main(){}\n").unwrap();
        fs::write(root.join("src/util.c"), "int main(){}\n").unwrap();
        fs::write(root.join("README.md"), "not source\n").unwrap();
        fs::write(root.join("vendor/dep.c"), "int dep(){}\n").unwrap();
        (dir, root)
    }

    #[test]
    fn finds_only_recognized_source_files() {
        let (_dir, root) = project();
        let files = Discovery::new(root).discover();
        assert_eq!(files.len(), 3);
        assert!(files.iter().all(|f| f.extension().unwrap() == "c"));
    }

    #[test]
    fn exclude_glob_drops_matching_paths() {
        let (_dir, root) = project();
        let files = Discovery::new(root)
            .with_exclude_patterns(vec!["*/vendor/*".to_string()])
            .discover();
        assert_eq!(files.len(), 2);
        assert!(!files.iter().any(|f| f.ends_with("vendor/dep.c")));
    }

    #[test]
    fn duplicate_suppression_keeps_only_the_first_copy() {
        let (_dir, root) = project();
        let files = Discovery::new(root).with_find_duplicates(true).discover();
        // main.c and util.c share identical contents; vendor/dep.c differs.
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn discovery_is_idempotent_for_an_unchanged_tree() {
        let (_dir, root) = project();
        let discovery = Discovery::new(root);
        let first = discovery.discover();
        let second = discovery.discover();
        assert_eq!(first, second);
    }
}
