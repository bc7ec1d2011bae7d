//! String interning for identifier and literal text.
//!
//! [`Symbol`] is a compact handle into a global, append-only string table.
//! Interning gives O(1) equality comparison between identifiers that would
//! otherwise require a full string compare, which matters in a lexer that
//! re-checks identifier text against keyword/alias tables on every token.
//!
//! # Examples
//!
//! ```
//! use lumac_util::symbol::Symbol;
//!
//! let a = Symbol::intern("own");
//! let b = Symbol::intern("own");
//! assert_eq!(a, b);
//! assert_eq!(a.as_str(), "own");
//! ```

mod interner;

pub use interner::STRING_TABLE;

/// A handle to an interned string. Two `Symbol`s are equal iff their
/// underlying text is equal.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    pub(crate) index: u32,
}

impl Symbol {
    /// Intern `text`, returning a stable handle to it.
    pub fn intern(text: &str) -> Symbol {
        STRING_TABLE.intern(text)
    }

    /// Resolve this symbol back to its text.
    pub fn as_str(&self) -> &'static str {
        STRING_TABLE
            .get(*self)
            .expect("Symbol always refers to a live entry in its originating table")
    }

    /// Snapshot of interner statistics, useful for benchmarking.
    pub fn stats_struct() -> InternerStats {
        STRING_TABLE.stats()
    }
}

impl std::fmt::Debug for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({:?})", self.as_str())
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<str> for Symbol {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Symbol {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Point-in-time statistics about the global string table, for profiling.
#[derive(Clone, Copy, Debug, Default)]
pub struct InternerStats {
    pub count: usize,
    pub hits: usize,
    pub misses: usize,
}

impl InternerStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
