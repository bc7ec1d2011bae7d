//! Ambient error types for this crate's own concerns (symbol interning,
//! diagnostic formatting). The lexer crate's own fatal error type
//! (`lumac_lex::LexError`) is defined downstream, following the same
//! `thiserror` idiom.

use thiserror::Error;

/// Error type for symbol interning operations.
#[derive(Debug, Error)]
pub enum SymbolError {
    #[error("failed to intern symbol: {0}")]
    InternFailed(String),

    #[error("symbol not found: index {index}")]
    NotFound { index: u32 },
}

/// Error type for diagnostic formatting.
#[derive(Debug, Error)]
pub enum DiagnosticError {
    #[error("failed to format diagnostic: {0}")]
    FormatFailed(String),

    #[error("invalid diagnostic code: {0}")]
    InvalidCode(String),
}

pub type SymbolResult<T> = std::result::Result<T, SymbolError>;
pub type DiagnosticResult<T> = std::result::Result<T, DiagnosticError>;

// Kept for API-shape parity with the teacher's error module, even though
// this crate does not (yet) have a multi-file SourceMap; see DESIGN.md for
// why `span::source_map` itself was dropped.
#[derive(Debug, Error)]
pub enum SourceMapError {
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("invalid span: start {start} > end {end}")]
    InvalidSpan { start: usize, end: usize },
}

pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;
