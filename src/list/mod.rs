//! List trie: left-child/right-sibling encoding, one symbol per node.
//!
//! Instead of a slot per symbol, a node links to its first child, and the
//! children of a node form a singly linked chain through their `next` links.
//! Any `char` can be stored, and a node costs two links no matter how many
//! children it has. Finding a child is a linear scan of the chain.

mod debug;

use std::io::{self, Write};
use std::mem;

use crate::alphabet::{self, ROOT_SYMBOL};
use crate::arena::{Linked, NodeArena, NodeRef};
use crate::error::TrieError;
use crate::print;
use crate::{Trie, TrieKind};

pub use debug::ListHandle;

/// Node of a [`ListTrie`].
#[derive(Debug, Clone)]
pub struct ListNode {
    child: NodeRef,
    next: NodeRef,
    symbol: char,
    is_word: bool,
}

impl ListNode {
    fn new(symbol: char) -> Self {
        Self {
            child: NodeRef::NULL,
            next: NodeRef::NULL,
            symbol,
            is_word: false,
        }
    }

    /// Symbol on the edge into this node.
    pub fn symbol(&self) -> char {
        self.symbol
    }

    /// Whether the path to this node spells an inserted key.
    pub fn is_word(&self) -> bool {
        self.is_word
    }
}

impl Linked for ListNode {
    #[inline]
    fn child(&self) -> NodeRef {
        self.child
    }

    #[inline]
    fn next(&self) -> NodeRef {
        self.next
    }
}

/// Left-child/right-sibling trie.
#[derive(Debug, Clone)]
pub struct ListTrie {
    nodes: NodeArena<ListNode>,
}

impl ListTrie {
    /// Create a trie holding only the root.
    pub fn new() -> Self {
        Self {
            nodes: NodeArena::with_root(ListNode::new(ROOT_SYMBOL)),
        }
    }

    /// Handle on the root for [`print`] and inspection.
    pub fn root(&self) -> ListHandle<'_> {
        ListHandle::new(self, self.nodes.root())
    }

    /// Child of `parent` holding `symbol`, if any.
    fn find_child(&self, parent: NodeRef, symbol: char) -> Option<NodeRef> {
        self.nodes
            .children(parent)
            .find(|&c| self.nodes[c].symbol == symbol)
    }

    /// Child of `parent` holding `symbol`, appended to the end of the
    /// sibling chain if missing.
    fn child_or_insert(&mut self, parent: NodeRef, symbol: char) -> NodeRef {
        let Some(first) = self.nodes[parent].child.get() else {
            let n = self.nodes.alloc(ListNode::new(symbol));
            self.nodes[parent].child = n;
            return n;
        };

        let mut last = first;
        loop {
            if self.nodes[last].symbol == symbol {
                return last;
            }
            match self.nodes[last].next.get() {
                Some(next) => last = next,
                None => break,
            }
        }

        let n = self.nodes.alloc(ListNode::new(symbol));
        self.nodes[last].next = n;
        n
    }
}

impl Default for ListTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie for ListTrie {
    fn kind(&self) -> TrieKind {
        TrieKind::List
    }

    fn try_insert(&mut self, key: &str) -> Result<(), TrieError> {
        let mut cur = self.nodes.root();
        for symbol in key.chars().map(alphabet::fold) {
            cur = self.child_or_insert(cur, symbol);
        }
        self.nodes[cur].is_word = true;
        Ok(())
    }

    fn search(&self, key: &str) -> bool {
        let mut cur = self.nodes.root();
        for symbol in key.chars().map(alphabet::fold) {
            match self.find_child(cur, symbol) {
                Some(child) => cur = child,
                None => return false,
            }
        }
        self.nodes[cur].is_word
    }

    fn count(&self) -> usize {
        self.nodes.sum_linked(self.nodes.root(), &|_: &ListNode| 1)
    }

    fn size_of(&self) -> usize {
        self.count() * mem::size_of::<ListNode>()
    }

    fn write_tree(&self, out: &mut dyn Write) -> io::Result<()> {
        print::write_tree(&self.root(), out)
    }
}
