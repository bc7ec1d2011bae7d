//! Stable, human-referenceable diagnostic codes (`E1001`, ...).

use std::fmt;

/// A diagnostic code: a short prefix plus a zero-padded number, e.g. `E1001`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    prefix: &'static str,
    number: u32,
}

impl DiagnosticCode {
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    pub const fn number(&self) -> u32 {
        self.number
    }

    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str())
    }
}

/// Lexer error codes (`E1001`..`E1008`), one per [`crate::error`]-style
/// error kind a downstream lexer crate defines. Kept here (rather than in
/// the lexer crate) so parser/semantic stages can reference the same
/// numbering scheme without a circular dependency.
impl DiagnosticCode {
    pub const E_LEXER_UNEXPECTED_CHAR: DiagnosticCode = DiagnosticCode::new("E", 1001);
    pub const E_LEXER_UNTERMINATED: DiagnosticCode = DiagnosticCode::new("E", 1002);
    pub const E_LEXER_MALFORMED_NUMBER: DiagnosticCode = DiagnosticCode::new("E", 1003);
    pub const E_LEXER_RESERVED_WORD: DiagnosticCode = DiagnosticCode::new("E", 1004);
    pub const E_LEXER_ILLEGAL_ESCAPE: DiagnosticCode = DiagnosticCode::new("E", 1005);
    pub const E_LEXER_ILLEGAL_REGEX: DiagnosticCode = DiagnosticCode::new("E", 1006);
    pub const E_LEXER_ILLEGAL_HEREDOC: DiagnosticCode = DiagnosticCode::new("E", 1007);
    pub const E_LEXER_INDENTATION: DiagnosticCode = DiagnosticCode::new("E", 1008);
    pub const E_LEXER_UNMATCHED_CLOSER: DiagnosticCode = DiagnosticCode::new("E", 1009);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_zero_padding() {
        assert_eq!(DiagnosticCode::new("E", 7).as_str(), "E0007");
    }

    #[test]
    fn lexer_codes_are_distinct() {
        let codes = [
            DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            DiagnosticCode::E_LEXER_UNTERMINATED,
            DiagnosticCode::E_LEXER_MALFORMED_NUMBER,
            DiagnosticCode::E_LEXER_RESERVED_WORD,
            DiagnosticCode::E_LEXER_ILLEGAL_ESCAPE,
            DiagnosticCode::E_LEXER_ILLEGAL_REGEX,
            DiagnosticCode::E_LEXER_ILLEGAL_HEREDOC,
            DiagnosticCode::E_LEXER_INDENTATION,
            DiagnosticCode::E_LEXER_UNMATCHED_CLOSER,
        ];
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b);
                }
            }
        }
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(
            DiagnosticCode::E_LEXER_UNTERMINATED.to_string(),
            DiagnosticCode::E_LEXER_UNTERMINATED.as_str()
        );
    }
}
