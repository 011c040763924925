//! Language readers: small state machines that turn a token stream into
//! calls against a [`UniversalCode`] builder. `mod::Reader` implements
//! the shared C-like state machine (covers C, C++ and Java) and the
//! Objective-C extension of it, selected by [`Language`] at construction
//! time so the two don't drift into separate copies of `Global`/`Imp`.

pub mod selector;

use crate::core::Token;
use crate::universal_code::UniversalCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    CLike,
    ObjectiveC,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Global,
    Namespace,
    Operator,
    Dec,
    DecToImp,
    ConstructorInitList,
    Imp,
    ObjcDecBegin,
    ObjcDec,
    ObjcParamType,
    ObjcParam,
}

const BASE_CONDITIONS: &[&str] = &["if", "for", "while", "&&", "||", "case", "?", "catch"];
const PREPROCESSOR_CONDITIONS: &[&str] = &["#if", "#elif"];

/// Drives a token stream through the shared C-like/Objective-C state
/// machine, feeding a [`UniversalCode`] builder as functions are found.
pub struct Reader {
    language: Language,
    state: State,
    bracket_level: i32,
    brace_count: u32,
    last_preprocessor: Option<String>,
    count_preprocessor_conditions: bool,
}

impl Reader {
    pub fn new(language: Language, count_preprocessor_conditions: bool) -> Self {
        Self {
            language,
            state: State::Global,
            bracket_level: 0,
            brace_count: 0,
            last_preprocessor: None,
            count_preprocessor_conditions,
        }
    }

    fn is_condition(&self, token: &str) -> bool {
        BASE_CONDITIONS.contains(&token)
            || (self.count_preprocessor_conditions && PREPROCESSOR_CONDITIONS.contains(&token))
    }

    /// Feeds one token into the state machine. Newline tokens never
    /// reach individual state handlers: they only advance the file-level
    /// line count.
    pub fn feed(&mut self, token: &Token, code: &mut UniversalCode) {
        if token.is_newline() {
            code.new_line();
            return;
        }

        // A macro word outside a function body can't be meaningfully
        // attributed to a declaration in progress, so it is dropped
        // rather than fed to the state machine (matches every state
        // except Imp, where preprocessor conditionals participate in
        // complexity counting).
        if token.lexeme.starts_with('#') && self.state != State::Imp {
            return;
        }

        match self.state {
            State::Global => self.global(token, code),
            State::Namespace => self.namespace(token, code),
            State::Operator => self.operator(token, code),
            State::Dec => self.dec(token, code),
            State::DecToImp => self.dec_to_imp(token, code),
            State::ConstructorInitList => self.constructor_init_list(token),
            State::Imp => self.imp(token, code),
            State::ObjcDecBegin => self.objc_dec_begin(token, code),
            State::ObjcDec => self.objc_dec(token, code),
            State::ObjcParamType => self.objc_param_type(token, code),
            State::ObjcParam => self.objc_param(),
        }
    }

    fn global(&mut self, token: &Token, code: &mut UniversalCode) {
        let lexeme = token.lexeme.as_str();
        if lexeme == "(" {
            self.bracket_level = 1;
            self.state = State::Dec;
            code.add_to_long_function_name(lexeme);
        } else if lexeme == "::" {
            self.state = State::Namespace;
        } else {
            // Objective-C's leading `+`/`-` falls through to here like
            // any other token: it becomes a throwaway candidate function
            // name, later discarded when `DecToImp` replaces it with the
            // real selector keyword once the `(returnType)` parens close.
            code.start_new_function(lexeme, token.line);
            if lexeme == "operator" {
                self.state = State::Operator;
            }
        }
    }

    fn operator(&mut self, token: &Token, code: &mut UniversalCode) {
        let lexeme = token.lexeme.as_str();
        if lexeme != "(" {
            self.state = State::Global;
        }
        code.add_to_function_name(&format!(" {lexeme}"));
    }

    fn namespace(&mut self, token: &Token, code: &mut UniversalCode) {
        let lexeme = token.lexeme.as_str();
        self.state = if lexeme == "operator" {
            State::Operator
        } else {
            State::Global
        };
        code.add_to_function_name(&format!("::{lexeme}"));
    }

    /// At parameter-list depth 1, every token is a parameter. At any
    /// other depth it just widens the long name. Closing the outermost
    /// bracket returns to depth 0 and drops straight to `DecToImp`; that
    /// closing token is appended directly (no leading space) so `)`
    /// hugs the preceding parameter instead of floating a space before
    /// it.
    fn dec(&mut self, token: &Token, code: &mut UniversalCode) {
        let lexeme = token.lexeme.as_str();
        match lexeme {
            "(" | "<" => {
                self.bracket_level += 1;
                code.add_to_long_function_name(&format!(" {lexeme}"));
            }
            ")" | ">" => {
                self.bracket_level -= 1;
                if self.bracket_level == 0 {
                    self.state = State::DecToImp;
                    code.add_to_long_function_name(lexeme);
                } else {
                    code.add_to_long_function_name(&format!(" {lexeme}"));
                }
            }
            _ if self.bracket_level == 1 => {
                code.parameter(lexeme);
            }
            _ => {
                code.add_to_long_function_name(&format!(" {lexeme}"));
            }
        }
    }

    fn dec_to_imp(&mut self, token: &Token, code: &mut UniversalCode) {
        let lexeme = token.lexeme.as_str();

        if self.language == Language::ObjectiveC && (lexeme == "+" || lexeme == "-") {
            self.state = State::Global;
            return;
        }

        if lexeme == "const" || lexeme == "noexcept" {
            code.add_to_long_function_name(&format!(" {lexeme}"));
        } else if lexeme == "{" {
            self.brace_count = 1;
            self.state = State::Imp;
        } else if lexeme == ":" {
            self.state = State::ConstructorInitList;
        } else {
            self.state = State::Global;
        }

        // Objective-C: once a declarator token falls back to Global
        // (i.e. it wasn't one of the C-like continuations above), that
        // token is actually the first selector keyword of a method.
        if self.language == Language::ObjectiveC && self.state == State::Global {
            self.state = State::ObjcDecBegin;
            code.start_new_function(lexeme, token.line);
        }
    }

    fn constructor_init_list(&mut self, token: &Token) {
        if token.lexeme == "{" {
            self.brace_count = 1;
            self.state = State::Imp;
        }
    }

    fn imp(&mut self, token: &Token, code: &mut UniversalCode) {
        let lexeme = token.lexeme.as_str();

        if matches!(lexeme, "#else" | "#if" | "#endif") {
            self.last_preprocessor = Some(lexeme.to_string());
        }

        // Braces inside a `#else` branch are skipped for matching: the
        // reader only ever walks one preprocessor branch, so counting
        // braces from a branch not taken would desync brace_count.
        if self.last_preprocessor.as_deref() != Some("#else") {
            if lexeme == "{" {
                self.brace_count += 1;
            } else if lexeme == "}" {
                self.brace_count -= 1;
                if self.brace_count == 0 {
                    self.state = State::Global;
                    code.end_of_function();
                    return;
                }
            }
        }

        if self.is_condition(lexeme) {
            code.condition();
        } else {
            code.token();
        }
    }

    fn objc_dec_begin(&mut self, token: &Token, code: &mut UniversalCode) {
        let lexeme = token.lexeme.as_str();
        if lexeme == ":" {
            self.state = State::ObjcDec;
            code.add_to_function_name(lexeme);
        } else if lexeme == "{" {
            self.brace_count = 1;
            self.state = State::Imp;
        } else {
            self.state = State::Global;
        }
    }

    fn objc_dec(&mut self, token: &Token, code: &mut UniversalCode) {
        let lexeme = token.lexeme.as_str();
        if lexeme == "(" {
            self.state = State::ObjcParamType;
            code.add_to_long_function_name(lexeme);
        } else if lexeme == "," {
            // ignored: separates selector keywords in a param type, not
            // meaningful on its own
        } else if lexeme == "{" {
            self.brace_count = 1;
            self.state = State::Imp;
        } else {
            self.state = State::ObjcDecBegin;
            code.add_to_function_name(&format!(" {lexeme}"));
        }
    }

    fn objc_param_type(&mut self, token: &Token, code: &mut UniversalCode) {
        let lexeme = token.lexeme.as_str();
        if lexeme == ")" {
            self.state = State::ObjcParam;
        }
        code.add_to_long_function_name(&format!(" {lexeme}"));
    }

    /// The one parameter-variable-name token is consumed without being
    /// fed to `parameter()`: the original tool never calls `PARAMETER()`
    /// for Objective-C selector arguments at all, so `parameter_count`
    /// stays 0 for every Objective-C method regardless of arity. The
    /// comma-driven counting `parameter()` implements is shaped for C
    /// declarator lists and would desync here anyway (ObjC keyword
    /// segments are never separated by `,`).
    fn objc_param(&mut self) {
        self.state = State::ObjcDec;
    }
}
