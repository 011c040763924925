//! Free-format tokenizer shared by every language reader.
//!
//! Turns raw source text into a lazy sequence of [`Token`]s, stripping
//! comments, collapsing `#define` bodies, joining multi-line string
//! literals, and collapsing runs of blank lines down to a single `"\n"`
//! marker. The tokenizer has no notion of C, C++, Objective-C or Java —
//! that knowledge lives entirely in the language readers that consume
//! its output.

use crate::core::Token;

const SYMBOL_CHARS: &str = "!%^&*-=+|\\<>/";

/// Lazily tokenizes `source`. Consumers may stop iterating at any point;
/// the tokenizer does no work beyond what has been pulled.
pub fn tokenize(source: &str) -> Tokenizer<'_> {
    Tokenizer::new(source)
}

pub struct Tokenizer<'a> {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    prev_raw_was_newline: bool,
    _source: &'a str,
}

impl<'a> Tokenizer<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            prev_raw_was_newline: false,
            _source: source,
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    /// Scans exactly one "raw" lexical span starting at `self.pos`,
    /// advancing `self.pos`/`self.line` past it. Returns the lexeme and
    /// whether it must be suppressed from the public token stream
    /// (comments and `#define` bodies never surface as tokens, but they
    /// still advance the line counter and reset the blank-line-run
    /// tracking exactly as a real token would).
    fn scan_raw(&mut self) -> (String, bool) {
        let c = self.chars[self.pos];

        if c == '\n' {
            self.pos += 1;
            self.line += 1;
            return ("\n".to_string(), false);
        }

        if c == ' ' || c == '\t' || c == '\r' {
            self.pos += 1;
            return (" ".to_string(), true);
        }

        if c == '#' {
            return self.scan_preprocessor();
        }

        if c == '/' && self.peek(1) == Some('*') {
            return self.scan_block_comment();
        }

        if c == '/' && self.peek(1) == Some('/') {
            return self.scan_line_comment();
        }

        if c == '"' || c == '\'' {
            return self.scan_string_literal(c);
        }

        if c.is_alphabetic() || c == '_' {
            return self.scan_identifier();
        }

        if c == ':' {
            return self.scan_colon();
        }

        if SYMBOL_CHARS.contains(c) {
            return self.scan_symbol_run();
        }

        self.pos += 1;
        (c.to_string(), false)
    }

    fn scan_identifier(&mut self) -> (String, bool) {
        let start = self.pos;
        while let Some(c) = self.peek(0) {
            if c.is_alphanumeric() || c == '_' {
                self.pos += 1;
            } else {
                break;
            }
        }
        (self.chars[start..self.pos].iter().collect(), false)
    }

    fn scan_colon(&mut self) -> (String, bool) {
        self.pos += 1;
        match self.peek(0) {
            Some(':') => {
                self.pos += 1;
                ("::".to_string(), false)
            }
            Some('=') => {
                self.pos += 1;
                (":=".to_string(), false)
            }
            _ => (":".to_string(), false),
        }
    }

    fn scan_symbol_run(&mut self) -> (String, bool) {
        let start = self.pos;
        while let Some(c) = self.peek(0) {
            if SYMBOL_CHARS.contains(c) {
                self.pos += 1;
            } else {
                break;
            }
        }
        (self.chars[start..self.pos].iter().collect(), false)
    }

    fn scan_string_literal(&mut self, quote: char) -> (String, bool) {
        let start = self.pos;
        self.pos += 1;
        loop {
            if self.at_end() {
                break;
            }
            let c = self.chars[self.pos];
            if c == quote {
                let preceding_backslashes = self.chars[start + 1..self.pos]
                    .iter()
                    .rev()
                    .take_while(|&&ch| ch == '\\')
                    .count();
                self.pos += 1;
                if preceding_backslashes % 2 == 0 {
                    break;
                }
                continue;
            }
            self.pos += 1;
        }
        self.finish_multiline_span(start)
    }

    fn scan_block_comment(&mut self) -> (String, bool) {
        let start = self.pos;
        self.pos += 2;
        while !self.at_end() {
            if self.chars[self.pos] == '*' && self.peek(1) == Some('/') {
                self.pos += 2;
                break;
            }
            self.pos += 1;
        }
        let (lexeme, _) = self.finish_multiline_span(start);
        (lexeme, true)
    }

    fn scan_line_comment(&mut self) -> (String, bool) {
        let start = self.pos;
        while !self.at_end() && self.chars[self.pos] != '\n' {
            self.pos += 1;
        }
        (self.chars[start..self.pos].iter().collect(), true)
    }

    /// Advances `self.line` by the number of `\n` characters in the span
    /// just scanned and returns that span as a lexeme.
    fn finish_multiline_span(&mut self, start: usize) -> (String, bool) {
        let span = &self.chars[start..self.pos];
        self.line += span.iter().filter(|&&c| c == '\n').count();
        (span.iter().collect(), false)
    }

    fn scan_preprocessor(&mut self) -> (String, bool) {
        let hash_pos = self.pos;
        self.pos += 1;
        while matches!(self.peek(0), Some(' ') | Some('\t')) {
            self.pos += 1;
        }
        let word_start = self.pos;
        while let Some(c) = self.peek(0) {
            if c.is_alphanumeric() || c == '_' {
                self.pos += 1;
            } else {
                break;
            }
        }
        let word: String = self.chars[word_start..self.pos].iter().collect();

        if word.is_empty() {
            // Bare '#' with nothing recognizable after it: treat as a
            // plain punctuation character.
            self.pos = hash_pos + 1;
            return ("#".to_string(), false);
        }

        let canonical = format!("#{word}");

        // Every directive except `#define` consumes the rest of its line
        // (e.g. `#ifdef X`, `#include <y>`) but still surfaces as a
        // single emitted token; `#define`'s body is suppressed entirely.
        match word.as_str() {
            "define" => {
                self.consume_define_body();
                (canonical, true)
            }
            _ => {
                self.skip_to_end_of_line();
                (canonical, false)
            }
        }
    }

    /// Consumes through the first newline whose preceding (stripped)
    /// line does not end in a backslash continuation.
    fn consume_define_body(&mut self) {
        loop {
            match self.find_newline_from(self.pos) {
                Some(nl_pos) => {
                    let line_text: String = self.chars[self.pos..nl_pos].iter().collect();
                    if line_text.trim_end().ends_with('\\') {
                        self.pos = nl_pos + 1;
                        self.line += 1;
                        continue;
                    }
                    self.pos = nl_pos;
                    return;
                }
                None => {
                    self.line += self.chars[self.pos..]
                        .iter()
                        .filter(|&&c| c == '\n')
                        .count();
                    self.pos = self.chars.len();
                    return;
                }
            }
        }
    }

    fn skip_to_end_of_line(&mut self) {
        match self.find_newline_from(self.pos) {
            Some(nl_pos) => self.pos = nl_pos,
            None => self.pos = self.chars.len(),
        }
    }

    fn find_newline_from(&self, from: usize) -> Option<usize> {
        self.chars[from..]
            .iter()
            .position(|&c| c == '\n')
            .map(|offset| from + offset)
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if self.at_end() {
                return None;
            }
            let line_before = self.line;
            let (lexeme, suppressed) = self.scan_raw();
            let is_newline_raw = lexeme == "\n";

            if is_newline_raw {
                let was_in_blank_run = self.prev_raw_was_newline;
                self.prev_raw_was_newline = true;
                if was_in_blank_run {
                    continue;
                }
                return Some(Token::new("\n", self.line));
            }

            self.prev_raw_was_newline = false;

            if suppressed {
                continue;
            }

            // Single-line tokens report the line on which they begin;
            // multi-line spans already advanced self.line to the line
            // on which they end.
            let reported_line = if self.line == line_before {
                line_before
            } else {
                self.line
            };
            return Some(Token::new(lexeme, reported_line));
        }
    }
}
