//! # wordtrie
//!
//! Three prefix-tree encodings of the same string set, built to be compared
//! by node count and estimated memory footprint.
//!
//! - [`ArrayTrie`]: one fixed 30-slot child array per node
//! - [`ListTrie`]: left-child/right-sibling links, one symbol per node
//! - [`RadixTrie`]: left-child/right-sibling links, one path-compressed edge
//!   per node
//!
//! All three are membership sets behind the object-safe [`Trie`] trait.
//!
//! ## Example
//!
//! ```rust
//! use wordtrie::{Trie, TrieKind};
//!
//! for kind in TrieKind::ALL {
//!     let mut trie = kind.build();
//!     trie.insert("test");
//!     trie.insert("team");
//!
//!     assert!(trie.search("team"));
//!     assert!(!trie.search("te"));
//! }
//! ```
//!
//! ## Keys
//!
//! Every variant folds ASCII upper case to lower case before storing or
//! comparing a symbol, so all three agree on every query. The array variant
//! only has slots for the letters and `-`, `'`, `2`, `3`; any other symbol is
//! rejected (see [`Trie::try_insert`]). The empty key marks the root itself.
//!
//! ## Threading
//!
//! None of the tries synchronize internally. Insertion takes `&mut self`;
//! once built, a trie can be read through shared references.

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alphabet;
pub mod arena;
pub mod array;
pub mod config;
pub mod dict;
mod error;
pub mod list;
pub mod print;
pub mod radix;
pub mod report;

#[cfg(test)]
mod proptests;

use std::fmt;
use std::io::{self, Write};

pub use array::ArrayTrie;
pub use config::Config;
pub use dict::Dictionary;
pub use error::{LoadError, TrieError};
pub use list::ListTrie;
pub use radix::RadixTrie;
pub use report::Report;

/// Node count and estimated footprint of a trie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrieStats {
    /// Number of nodes, root included
    pub nodes: usize,
    /// Estimated bytes, see [`Trie::size_of`]
    pub bytes: usize,
}

/// A set of strings indexed by shared prefixes.
pub trait Trie {
    /// Which encoding this is.
    fn kind(&self) -> TrieKind;

    /// Add `key` to the set.
    ///
    /// Inserting a key twice leaves the trie unchanged. A rejected key leaves
    /// the trie unchanged too.
    fn try_insert(&mut self, key: &str) -> Result<(), TrieError>;

    /// Add `key` to the set.
    ///
    /// # Panics
    /// Panics if the trie cannot represent `key`. Only [`ArrayTrie`] has
    /// such keys; use [`Trie::try_insert`] for unvalidated input.
    fn insert(&mut self, key: &str) {
        if let Err(e) = self.try_insert(key) {
            panic!("{}: cannot insert {key:?}: {e}", self.kind());
        }
    }

    /// Check whether `key` was inserted.
    ///
    /// # Panics
    /// [`ArrayTrie`] panics on a symbol it has no slot for, like
    /// [`Trie::insert`].
    fn search(&self, key: &str) -> bool;

    /// Number of nodes, root included.
    fn count(&self) -> usize;

    /// Estimated memory footprint in bytes.
    ///
    /// Node count times the in-memory node size, plus the edge bytes for
    /// [`RadixTrie`]. Spare arena capacity and allocator overhead are not
    /// included: the figure is for comparing encodings, not for measuring
    /// a process.
    fn size_of(&self) -> usize;

    /// Render the trie as a box-drawing tree.
    fn write_tree(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Render the trie to stdout.
    fn print(&self) -> io::Result<()> {
        self.write_tree(&mut io::stdout().lock())
    }

    /// Node count and footprint together.
    fn stats(&self) -> TrieStats {
        TrieStats {
            nodes: self.count(),
            bytes: self.size_of(),
        }
    }
}

/// The available trie encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum TrieKind {
    /// [`ArrayTrie`]
    Array,
    /// [`ListTrie`]
    List,
    /// [`RadixTrie`]
    Radix,
}

impl TrieKind {
    /// Every encoding, in report order.
    pub const ALL: [TrieKind; 3] = [TrieKind::Array, TrieKind::List, TrieKind::Radix];

    /// Create an empty trie of this kind.
    pub fn build(self) -> Box<dyn Trie> {
        match self {
            TrieKind::Array => Box::new(ArrayTrie::new()),
            TrieKind::List => Box::new(ListTrie::new()),
            TrieKind::Radix => Box::new(RadixTrie::new()),
        }
    }

    /// Human-readable name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            TrieKind::Array => "Array trie",
            TrieKind::List => "List trie",
            TrieKind::Radix => "Radix trie",
        }
    }
}

impl fmt::Display for TrieKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
