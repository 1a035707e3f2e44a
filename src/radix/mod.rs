//! Radix trie: left-child/right-sibling links with path-compressed edges.
//!
//! Same shape as the [list trie](crate::list), but a node carries a whole
//! substring. Chains of single-child nodes collapse into one edge, so the
//! node count drops sharply on natural-language word lists.
//!
//! Edges are kept maximal under insertion: when a key leaves an existing
//! edge partway through, the edge is split at the divergence point.
//!
//! ```text
//! insert "test"        insert "team"
//!
//! └── -                └── -
//!     └── test             └── te
//!                              ├── st
//!                              └── am
//! ```

mod debug;
mod edge;

use std::borrow::Cow;
use std::io::{self, Write};
use std::mem;

use crate::alphabet::{self, ROOT_SYMBOL};
use crate::arena::{Linked, NodeArena, NodeRef};
use crate::error::TrieError;
use crate::print;
use crate::{Trie, TrieKind};

pub use debug::RadixHandle;
pub use edge::{common_prefix, Edge, EdgeBuf};

/// Node of a [`RadixTrie`].
#[derive(Debug, Clone)]
pub struct RadixNode {
    child: NodeRef,
    next: NodeRef,
    edge: Edge,
    is_word: bool,
}

impl RadixNode {
    fn new(edge: Edge, is_word: bool) -> Self {
        Self {
            child: NodeRef::NULL,
            next: NodeRef::NULL,
            edge,
            is_word,
        }
    }

    /// Whether the path to this node spells an inserted key.
    pub fn is_word(&self) -> bool {
        self.is_word
    }
}

impl Linked for RadixNode {
    #[inline]
    fn child(&self) -> NodeRef {
        self.child
    }

    #[inline]
    fn next(&self) -> NodeRef {
        self.next
    }
}

/// Path-compressed left-child/right-sibling trie.
#[derive(Debug, Clone)]
pub struct RadixTrie {
    nodes: NodeArena<RadixNode>,
    edges: EdgeBuf,
}

/// Fold ASCII upper case, borrowing when there is nothing to fold.
fn normalize(key: &str) -> Cow<'_, str> {
    if key.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(key.chars().map(alphabet::fold).collect())
    } else {
        Cow::Borrowed(key)
    }
}

impl RadixTrie {
    /// Create a trie holding only the root.
    pub fn new() -> Self {
        let mut edges = EdgeBuf::new();
        let mut placeholder = [0u8; 4];
        let root_edge = edges.push(ROOT_SYMBOL.encode_utf8(&mut placeholder));
        Self {
            nodes: NodeArena::with_root(RadixNode::new(root_edge, false)),
            edges,
        }
    }

    /// Handle on the root for [`print`] and inspection.
    pub fn root(&self) -> RadixHandle<'_> {
        RadixHandle::new(self, self.nodes.root())
    }

    /// Edge text of node `r`.
    #[inline]
    fn edge(&self, r: NodeRef) -> &str {
        self.edges.get(self.nodes[r].edge)
    }

    /// First child of `parent` whose edge shares a non-empty prefix with
    /// `key`, with the length of that prefix.
    ///
    /// Sibling edges never share a first character, so at most one child
    /// can match.
    fn match_partial(&self, parent: NodeRef, key: &str) -> Option<(NodeRef, usize)> {
        self.nodes.children(parent).find_map(|c| {
            let shared = common_prefix(key, self.edge(c));
            (shared > 0).then_some((c, shared))
        })
    }

    /// Child of `parent` whose whole edge is a prefix of `key`.
    fn match_exact(&self, parent: NodeRef, key: &str) -> Option<NodeRef> {
        self.match_partial(parent, key)
            .filter(|&(c, shared)| shared == self.nodes[c].edge.len())
            .map(|(c, _)| c)
    }

    /// Append `node` to the children of `parent`.
    fn add_child(&mut self, parent: NodeRef, node: NodeRef) {
        let last = self.nodes.children(parent).last();
        match last {
            Some(last) => self.nodes[last].next = node,
            None => self.nodes[parent].child = node,
        }
    }

    /// Split the edge of `r` after `shared` bytes.
    ///
    /// `r` keeps the shared head; a new child takes the old tail together
    /// with the former children and word flag of `r`. If `rest` (the part
    /// of the key after the head) is not empty it becomes a second child,
    /// otherwise `r` itself now ends the key.
    fn split(&mut self, r: NodeRef, shared: usize, rest: &str) {
        let node = &self.nodes[r];
        let (head, tail) = node.edge.split_at(shared);
        let old_suffix = RadixNode {
            child: node.child,
            next: NodeRef::NULL,
            edge: tail,
            is_word: node.is_word,
        };
        let old_suffix = self.nodes.alloc(old_suffix);

        let node = &mut self.nodes[r];
        node.edge = head;
        node.child = old_suffix;
        node.is_word = rest.is_empty();

        if !rest.is_empty() {
            let edge = self.edges.push(rest);
            let new_suffix = self.nodes.alloc(RadixNode::new(edge, true));
            self.nodes[old_suffix].next = new_suffix;
        }
    }

    /// Total bytes of edge text referenced by reachable nodes.
    pub fn edge_bytes(&self) -> usize {
        self.nodes
            .sum_linked(self.nodes.root(), &|n: &RadixNode| n.edge.len())
    }
}

impl Default for RadixTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie for RadixTrie {
    fn kind(&self) -> TrieKind {
        TrieKind::Radix
    }

    fn try_insert(&mut self, key: &str) -> Result<(), TrieError> {
        let key = normalize(key);
        let mut rest: &str = &key;
        let mut cur = self.nodes.root();

        loop {
            if rest.is_empty() {
                // The key ends at an existing node, possibly one a split left
                // without a word flag.
                self.nodes[cur].is_word = true;
                return Ok(());
            }

            match self.match_partial(cur, rest) {
                None => {
                    let edge = self.edges.push(rest);
                    let n = self.nodes.alloc(RadixNode::new(edge, true));
                    self.add_child(cur, n);
                    return Ok(());
                }
                Some((child, shared)) if shared == self.nodes[child].edge.len() => {
                    rest = &rest[shared..];
                    cur = child;
                }
                Some((child, shared)) => {
                    self.split(child, shared, &rest[shared..]);
                    return Ok(());
                }
            }
        }
    }

    fn search(&self, key: &str) -> bool {
        let key = normalize(key);
        let mut rest: &str = &key;
        let mut cur = self.nodes.root();

        while !rest.is_empty() {
            match self.match_exact(cur, rest) {
                Some(child) => {
                    rest = &rest[self.nodes[child].edge.len()..];
                    cur = child;
                }
                None => return false,
            }
        }
        self.nodes[cur].is_word
    }

    fn count(&self) -> usize {
        self.nodes.sum_linked(self.nodes.root(), &|_: &RadixNode| 1)
    }

    fn size_of(&self) -> usize {
        self.nodes.sum_linked(self.nodes.root(), &|n: &RadixNode| {
            mem::size_of::<RadixNode>() + n.edge.len()
        })
    }

    fn write_tree(&self, out: &mut dyn Write) -> io::Result<()> {
        print::write_tree(&self.root(), out)
    }
}
