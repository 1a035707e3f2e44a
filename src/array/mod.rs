//! Array trie: every node carries one child slot per alphabet symbol.
//!
//! The simplest encoding and the largest one. A node costs
//! `ALPHABET_SIZE` links whether or not they are used, but descending is a
//! single indexed load.

mod debug;

use std::io::{self, Write};
use std::mem;

use smallvec::SmallVec;

use crate::alphabet::{self, ALPHABET_SIZE};
use crate::arena::{NodeArena, NodeRef};
use crate::error::TrieError;
use crate::print;
use crate::{Trie, TrieKind};

pub use debug::ArrayHandle;

/// Node of an [`ArrayTrie`].
#[derive(Debug, Clone)]
pub struct ArrayNode {
    children: [NodeRef; ALPHABET_SIZE],
    is_word: bool,
}

impl ArrayNode {
    fn new() -> Self {
        Self {
            children: [NodeRef::NULL; ALPHABET_SIZE],
            is_word: false,
        }
    }

    /// Whether the path to this node spells an inserted key.
    pub fn is_word(&self) -> bool {
        self.is_word
    }
}

/// Trie over the fixed 30-symbol [`alphabet`].
#[derive(Debug, Clone)]
pub struct ArrayTrie {
    nodes: NodeArena<ArrayNode>,
}

impl ArrayTrie {
    /// Create a trie holding only the root.
    pub fn new() -> Self {
        Self {
            nodes: NodeArena::with_root(ArrayNode::new()),
        }
    }

    /// Handle on the root for [`print`] and inspection.
    pub fn root(&self) -> ArrayHandle<'_> {
        ArrayHandle::root(self)
    }

    fn encode_key(key: &str) -> Result<SmallVec<[usize; 32]>, TrieError> {
        key.chars()
            .enumerate()
            .map(|(i, c)| alphabet::encode(c, i))
            .collect()
    }

    fn count_from(&self, r: NodeRef) -> usize {
        // Explicit stack: a single long key is a chain as deep as the key.
        let mut count = 0;
        let mut stack = vec![r];
        while let Some(r) = stack.pop() {
            count += 1;
            stack.extend(self.nodes[r].children.iter().filter_map(|c| c.get()));
        }
        count
    }
}

impl Default for ArrayTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie for ArrayTrie {
    fn kind(&self) -> TrieKind {
        TrieKind::Array
    }

    fn try_insert(&mut self, key: &str) -> Result<(), TrieError> {
        // Encode up front so a rejected key allocates nothing.
        let slots = Self::encode_key(key)?;

        let mut cur = self.nodes.root();
        for slot in slots {
            let child = self.nodes[cur].children[slot];
            cur = match child.get() {
                Some(child) => child,
                None => {
                    let n = self.nodes.alloc(ArrayNode::new());
                    self.nodes[cur].children[slot] = n;
                    n
                }
            };
        }
        self.nodes[cur].is_word = true;
        Ok(())
    }

    fn search(&self, key: &str) -> bool {
        // The whole key is checked first, so a miss on an earlier symbol
        // cannot hide a bad one further on.
        let slots = match Self::encode_key(key) {
            Ok(slots) => slots,
            Err(e) => panic!("{}: cannot search {key:?}: {e}", self.kind()),
        };

        let mut cur = self.nodes.root();
        for slot in slots {
            match self.nodes[cur].children[slot].get() {
                Some(child) => cur = child,
                None => return false,
            }
        }
        self.nodes[cur].is_word
    }

    fn count(&self) -> usize {
        self.count_from(self.nodes.root())
    }

    fn size_of(&self) -> usize {
        self.count() * mem::size_of::<ArrayNode>()
    }

    fn write_tree(&self, out: &mut dyn Write) -> io::Result<()> {
        print::write_tree(&self.root(), out)
    }
}
