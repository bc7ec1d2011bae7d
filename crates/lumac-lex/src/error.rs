//! The lexer's own error contract.
//!
//! `tokenize` stops at the first lexical error and returns it directly —
//! unlike `lumac_util::Handler`'s accumulate-and-continue model, which
//! exists for later compiler stages that want to report several problems
//! from one file at once. [`LexError`] is intentionally a closed
//! `thiserror` enum, one variant per diagnostic code in
//! `lumac_util::diagnostic::codes`, so every lexical failure mode a caller
//! might match on is enumerated up front.
//!
//! A `LexError` converts into a [`Diagnostic`] via `From` for anyone who
//! wants to render it, or fold it into a `Handler` alongside diagnostics
//! from other stages.

use lumac_util::diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode};
use lumac_util::Span;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LexError {
    #[error("unexpected character {ch:?}")]
    UnexpectedChar { ch: char, span: Span },

    #[error("unterminated string literal")]
    UnterminatedString { span: Span },

    #[error("malformed number literal: {reason}")]
    MalformedNumber { reason: String, span: Span },

    #[error("reserved word {word:?} cannot be used as an identifier here")]
    ReservedWord { word: String, span: Span },

    #[error("illegal escape sequence")]
    IllegalEscape { span: Span },

    #[error("illegal regular expression: {reason}")]
    IllegalRegex { reason: String, span: Span },

    #[error("illegal heredoc: {reason}")]
    IllegalHeredoc { reason: String, span: Span },

    #[error("indentation error: {reason}")]
    Indentation { reason: String, span: Span },

    #[error("unmatched closing {ch:?}")]
    UnmatchedCloser { ch: char, span: Span },
}

impl LexError {
    /// The human-readable message, same text `Display`/`{}` produces —
    /// exposed as its own method so a caller can build the `{message,
    /// first_line, first_column}` triple without formatting the error
    /// itself.
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedChar { span, .. }
            | LexError::UnterminatedString { span }
            | LexError::MalformedNumber { span, .. }
            | LexError::ReservedWord { span, .. }
            | LexError::IllegalEscape { span }
            | LexError::IllegalRegex { span, .. }
            | LexError::IllegalHeredoc { span, .. }
            | LexError::Indentation { span, .. }
            | LexError::UnmatchedCloser { span, .. } => *span,
        }
    }

    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnexpectedChar { .. } => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            LexError::UnterminatedString { .. } => DiagnosticCode::E_LEXER_UNTERMINATED,
            LexError::MalformedNumber { .. } => DiagnosticCode::E_LEXER_MALFORMED_NUMBER,
            LexError::ReservedWord { .. } => DiagnosticCode::E_LEXER_RESERVED_WORD,
            LexError::IllegalEscape { .. } => DiagnosticCode::E_LEXER_ILLEGAL_ESCAPE,
            LexError::IllegalRegex { .. } => DiagnosticCode::E_LEXER_ILLEGAL_REGEX,
            LexError::IllegalHeredoc { .. } => DiagnosticCode::E_LEXER_ILLEGAL_HEREDOC,
            LexError::Indentation { .. } => DiagnosticCode::E_LEXER_INDENTATION,
            LexError::UnmatchedCloser { .. } => DiagnosticCode::E_LEXER_UNMATCHED_CLOSER,
        }
    }
}

impl From<&LexError> for Diagnostic {
    fn from(err: &LexError) -> Self {
        DiagnosticBuilder::error(err.to_string())
            .code(err.code())
            .span(err.span())
            .build()
    }
}

pub type LexResult<T> = Result<T, LexError>;
