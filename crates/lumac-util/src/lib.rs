//! Shared infrastructure for the lumac compiler: source spans, string
//! interning, and structured diagnostics.
//!
//! This crate carries no lexer-specific logic; it is the ambient layer a
//! lexer, parser, or later compiler stage all build on top of.

pub mod diagnostic;
pub mod error;
pub mod span;
pub mod symbol;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use error::{DiagnosticError, DiagnosticResult, SourceMapError, SourceMapResult, SymbolError, SymbolResult};
pub use span::{FileId, Span};
pub use symbol::Symbol;

pub use rustc_hash::{FxHashMap, FxHashSet};
