//! Process-unique opaque tokens.
//!
//! A [`Symbol`] is an enum value whose identity is the fact of its creation:
//! every call to [`Symbol::new`] or [`Symbol::with_description`] yields a
//! token equal only to copies of itself. The optional description is a label
//! for display and carries no weight in comparison or hashing.
//!
//! Symbols are process-local. There is deliberately no serialization for
//! them; an id has no meaning outside the process that allocated it.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(1);

/// An opaque token with process-unique identity.
#[derive(Copy, Clone)]
pub struct Symbol {
    id: u64,
    description: Option<&'static str>,
}

impl Symbol {
    /// Allocate a fresh symbol, distinct from every other symbol in the
    /// process.
    pub fn new() -> Self {
        Self {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            description: None,
        }
    }

    /// Allocate a fresh symbol carrying a display label. Two symbols with
    /// the same description are still distinct.
    pub fn with_description(description: &'static str) -> Self {
        Self {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            description: Some(description),
        }
    }

    pub fn description(&self) -> Option<&'static str> {
        self.description
    }
}

impl Default for Symbol {
    fn default() -> Self {
        Self::new()
    }
}

// Identity is the allocation id alone.
impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.description {
            Some(description) => write!(f, "Symbol({description})"),
            None => write!(f, "Symbol(#{})", self.id),
        }
    }
}
