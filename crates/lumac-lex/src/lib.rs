//! Lexer for an indentation-sensitive, expression-oriented scripting
//! language that compiles to JavaScript.
//!
//! The entry point is [`tokenize`]: give it source text and a
//! [`LexOptions`], get back a flat [`Vec<Token>`] or the first
//! [`LexError`] encountered. Internally this is a dispatch loop
//! (`driver`) trying a fixed sequence of matchers — identifier, comment,
//! string, number, regex, embedded-JS, operator — over a character
//! [`cursor::Cursor`], with indentation (`indent`) and bracket nesting
//! (`pairs`) tracked as cross-token state alongside it.
//!
//! String interpolation is handled by recursively invoking this same
//! dispatch loop on each `#{...}` fragment (`interpolate`); nothing else
//! in the crate is recursive.

pub mod cursor;
pub mod error;
pub mod indent;
pub mod location;
pub mod options;
pub mod pairs;
pub mod tables;
pub mod token;
pub mod unicode;

mod clean;
mod comment;
mod driver;
mod embedded_js;
mod identifier;
mod interpolate;
mod number;
mod operator;
mod regex;
mod strings;

pub use driver::{is_reserved, tokenize, Rewrite};
pub use error::{LexError, LexResult};
pub use options::LexOptions;
pub use tables::{RESERVED_WORDS, STRICT_PROSCRIBED};
pub use token::{Tag, Token};
