//! Thread-safe string table backing [`Symbol`](super::Symbol), adapted from
//! the teacher's DashMap/ahash interner. The large pre-reserved keyword
//! block the teacher seeds (Rust-flavored keywords like `fn`/`struct`) is
//! dropped: this crate's language has an entirely different keyword set,
//! and a hand-rolled lexer classifies keywords by matching `&str` directly
//! rather than by pre-registered symbol index (see `lumac-lex::tables`).

use ahash::AHasher;
use dashmap::DashMap;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::LazyLock;

use super::{InternerStats, Symbol};

pub static STRING_TABLE: LazyLock<StringTable> = LazyLock::new(StringTable::new);

/// Thread-safe, append-only string table.
///
/// Interned strings are leaked to obtain `'static` references. This is
/// acceptable for a compiler process: the table lives for the whole run and
/// strings are never removed.
pub struct StringTable {
    map: DashMap<u64, (&'static str, u32)>,
    next_index: AtomicUsize,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl StringTable {
    fn new() -> Self {
        Self {
            map: DashMap::with_capacity(256),
            next_index: AtomicUsize::new(0),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    fn hash_string(s: &str) -> u64 {
        let mut hasher = AHasher::default();
        s.hash(&mut hasher);
        hasher.finish()
    }

    /// Intern `string`, returning its handle. Thread-safe.
    pub fn intern(&self, string: &str) -> Symbol {
        let hash = Self::hash_string(string);

        if let Some(entry) = self.map.get(&hash) {
            if entry.value().0 == string {
                self.hits.fetch_add(1, Ordering::Relaxed);
                return Symbol { index: entry.value().1 };
            }
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        match self.map.entry(hash) {
            dashmap::mapref::entry::Entry::Occupied(entry) => {
                Symbol { index: entry.get().1 }
            }
            dashmap::mapref::entry::Entry::Vacant(entry) => {
                let interned: &'static str = Box::leak(string.to_string().into_boxed_str());
                let idx = self.next_index.fetch_add(1, Ordering::Relaxed) as u32;
                entry.insert((interned, idx));
                Symbol { index: idx }
            }
        }
    }

    /// Resolve a symbol back to its text, if it belongs to this table.
    pub fn get(&self, symbol: Symbol) -> Option<&'static str> {
        self.map
            .iter()
            .find(|entry| entry.value().1 == symbol.index)
            .map(|entry| entry.value().0)
    }

    pub fn stats(&self) -> InternerStats {
        InternerStats {
            count: self.map.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}
