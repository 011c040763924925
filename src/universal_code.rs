//! The `UniversalCode` builder: the single mutable sink that every
//! language reader drives through a small, language-neutral verb set.
//! This is deliberately thin — the tokenizer stays language-agnostic and
//! the readers stay pure state machines, with no direct mutation of
//! [`FunctionInfo`] from outside this module.

use crate::core::{FileInformation, FunctionInfo};
use std::path::Path;

pub struct UniversalCode {
    current_function: FunctionInfo,
    function_list: Vec<FunctionInfo>,
    nloc: usize,
    newline_pending: bool,
}

impl Default for UniversalCode {
    fn default() -> Self {
        Self::new()
    }
}

impl UniversalCode {
    pub fn new() -> Self {
        Self {
            current_function: FunctionInfo::new("", 0),
            function_list: Vec::new(),
            nloc: 0,
            newline_pending: true,
        }
    }

    pub fn start_new_function(&mut self, name: &str, start_line: usize) {
        self.current_function = FunctionInfo::new(name, start_line);
    }

    pub fn add_to_function_name(&mut self, text: &str) {
        self.current_function.name.push_str(text);
        self.current_function.long_name.push_str(text);
    }

    pub fn add_to_long_function_name(&mut self, text: &str) {
        self.current_function.long_name.push_str(text);
    }

    /// Records one token of a parameter list. `parameter_count` goes
    /// from 0 to 1 on the first call and bumps by one on every `","`
    /// after that — an empty parameter list never calls this at all, so
    /// `()` yields a count of 0, not 1.
    pub fn parameter(&mut self, token: &str) {
        self.current_function.long_name.push(' ');
        self.current_function.long_name.push_str(token);

        if self.current_function.parameter_count == 0 {
            self.current_function.parameter_count = 1;
        }
        if token == "," {
            self.current_function.parameter_count += 1;
        } else if !token.is_empty() {
            self.track_parameter_identifier(token);
        }
    }

    /// Best-effort parameter name extraction: the last bare identifier
    /// seen in each comma-delimited run at parameter-list depth is
    /// taken as that parameter's name (covers `Type name` and
    /// `Type *name` — the common case; no type resolution is attempted).
    fn track_parameter_identifier(&mut self, token: &str) {
        let is_identifier = token
            .chars()
            .next()
            .map(|c| c.is_alphabetic() || c == '_')
            .unwrap_or(false)
            && token.chars().all(|c| c.is_alphanumeric() || c == '_');
        if !is_identifier {
            return;
        }
        if self.current_function.parameters.len() < self.current_function.parameter_count {
            self.current_function.parameters.push(token.to_string());
        } else {
            // A later identifier in the same comma-delimited run
            // (e.g. the `name` in `Type *name`) replaces the type word
            // already recorded for this slot.
            if let Some(last) = self.current_function.parameters.last_mut() {
                *last = token.to_string();
            }
        }
    }

    pub fn token(&mut self) {
        if self.newline_pending {
            self.current_function.nloc += 1;
            self.newline_pending = false;
        }
        self.current_function.token_count += 1;
    }

    pub fn condition(&mut self) {
        self.token();
        self.current_function.cyclomatic_complexity += 1;
    }

    pub fn new_line(&mut self) {
        self.nloc += 1;
        self.newline_pending = true;
    }

    pub fn end_of_function(&mut self) {
        let finished = std::mem::replace(&mut self.current_function, FunctionInfo::new("", 0));
        self.function_list.push(finished);
    }

    pub fn into_file_information(self, filename: &Path) -> FileInformation {
        FileInformation::new(filename.to_path_buf(), self.nloc, self.function_list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_increments_nloc_only_once_per_line() {
        let mut u = UniversalCode::new();
        u.start_new_function("f", 1);
        u.new_line();
        u.token();
        u.token();
        u.token();
        assert_eq!(u.current_function.nloc, 1);
        assert_eq!(u.current_function.token_count, 3);
    }

    #[test]
    fn condition_bumps_ccn_and_counts_as_token() {
        let mut u = UniversalCode::new();
        u.start_new_function("f", 1);
        u.new_line();
        u.condition();
        assert_eq!(u.current_function.cyclomatic_complexity, 2);
        assert_eq!(u.current_function.token_count, 1);
        assert_eq!(u.current_function.nloc, 1);
    }

    #[test]
    fn end_of_function_appends_and_resets_cursor() {
        let mut u = UniversalCode::new();
        u.start_new_function("f", 1);
        u.new_line();
        u.token();
        u.end_of_function();
        assert_eq!(u.function_list.len(), 1);
        assert_eq!(u.function_list[0].name, "f");
        assert_eq!(u.current_function.name, "");
        assert_eq!(u.current_function.start_line, 0);
    }

    #[test]
    fn placeholder_never_escapes_unless_emitted() {
        let u = UniversalCode::new();
        let info = u.into_file_information(Path::new("x.c"));
        assert!(info.function_list.is_empty());
    }

    #[test]
    fn empty_parameter_list_has_zero_count() {
        let mut u = UniversalCode::new();
        u.start_new_function("fun", 1);
        // No parameter() calls at all for `()`.
        u.end_of_function();
        assert_eq!(u.function_list[0].parameter_count, 0);
    }

    #[test]
    fn parameter_list_tracks_names_and_count() {
        let mut u = UniversalCode::new();
        u.start_new_function("fun", 1);
        for tok in ["aa", "*", "bb", ",", "cc", "dd"] {
            u.parameter(tok);
        }
        u.end_of_function();
        let f = &u.function_list[0];
        assert_eq!(f.parameter_count, 2);
        assert_eq!(f.parameters, vec!["bb".to_string(), "dd".to_string()]);
        assert_eq!(f.long_name, "fun aa * bb , cc dd");
    }
}
