//! Node arena shared by the trie variants.
//!
//! Every trie owns one arena holding all of its nodes. Links between nodes
//! are 32-bit indices instead of boxed pointers:
//! - Nodes sit next to each other, in allocation order
//! - A link costs 4 bytes instead of 8
//! - Dropping a trie frees one buffer instead of recursing through the tree

use std::ops::{Index, IndexMut};

/// A 32-bit index into a [`NodeArena`].
///
/// `NodeRef::NULL` stands for an absent link (no child, no sibling).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct NodeRef(u32);

impl NodeRef {
    /// The absent link.
    pub const NULL: Self = Self(u32::MAX);

    /// Check if this is the absent link.
    #[inline]
    pub fn is_null(self) -> bool {
        self.0 == u32::MAX
    }

    /// `Some(self)` unless this is the absent link.
    #[inline]
    pub fn get(self) -> Option<Self> {
        (!self.is_null()).then_some(self)
    }

    /// Create a reference from an arena index.
    ///
    /// # Panics
    /// Panics if the index is >= 2^32 - 1.
    #[inline]
    pub fn from_usize(index: usize) -> Self {
        assert!(index < u32::MAX as usize, "node arena index too large");
        Self(index as u32)
    }

    /// Get the arena index.
    #[inline]
    pub fn as_usize(self) -> usize {
        debug_assert!(!self.is_null());
        self.0 as usize
    }
}

impl Default for NodeRef {
    fn default() -> Self {
        Self::NULL
    }
}

/// Append-only storage for the nodes of one trie.
///
/// Nodes cannot be freed individually; they live as long as the arena.
#[derive(Debug, Clone)]
pub struct NodeArena<N> {
    nodes: Vec<N>,
}

impl<N> NodeArena<N> {
    /// Create an arena holding only `root`, which gets index 0.
    pub fn with_root(root: N) -> Self {
        Self { nodes: vec![root] }
    }

    /// The root, always the first node allocated.
    #[inline]
    pub fn root(&self) -> NodeRef {
        NodeRef(0)
    }

    /// Move `node` into the arena and return its reference.
    pub fn alloc(&mut self, node: N) -> NodeRef {
        let r = NodeRef::from_usize(self.nodes.len());
        self.nodes.push(node);
        r
    }

    /// Number of nodes allocated.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if no node has been allocated.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<N> Index<NodeRef> for NodeArena<N> {
    type Output = N;

    #[inline]
    fn index(&self, r: NodeRef) -> &N {
        &self.nodes[r.as_usize()]
    }
}

impl<N> IndexMut<NodeRef> for NodeArena<N> {
    #[inline]
    fn index_mut(&mut self, r: NodeRef) -> &mut N {
        &mut self.nodes[r.as_usize()]
    }
}

/// A node in left-child/right-sibling form: the children of a node are the
/// chain starting at its `child` link and following `next` links.
pub trait Linked {
    /// First child, or `NodeRef::NULL`.
    fn child(&self) -> NodeRef;
    /// Next sibling, or `NodeRef::NULL`.
    fn next(&self) -> NodeRef;
}

impl<N: Linked> NodeArena<N> {
    /// Iterate over the children of `parent`, in chain order.
    pub fn children(&self, parent: NodeRef) -> Siblings<'_, N> {
        Siblings {
            arena: self,
            cur: self[parent].child(),
        }
    }

    /// Sum `f` over `start`, its child subtree, and every sibling after it
    /// together with their child subtrees.
    ///
    /// Child and sibling subtrees are disjoint, so every node is visited
    /// once. Sibling chains are walked in a loop and pending child chains
    /// go on an explicit stack, so the walk never recurses however long
    /// the keys are.
    pub fn sum_linked(&self, start: NodeRef, f: &impl Fn(&N) -> usize) -> usize {
        let mut total = 0;
        let mut chains = vec![start];
        while let Some(first) = chains.pop() {
            let mut cur = first.get();
            while let Some(r) = cur {
                let node = &self[r];
                total += f(node);
                if let Some(child) = node.child().get() {
                    chains.push(child);
                }
                cur = node.next().get();
            }
        }
        total
    }
}

/// Iterator over a sibling chain.
pub struct Siblings<'a, N> {
    arena: &'a NodeArena<N>,
    cur: NodeRef,
}

impl<N: Linked> Iterator for Siblings<'_, N> {
    type Item = NodeRef;

    fn next(&mut self) -> Option<NodeRef> {
        let r = self.cur.get()?;
        self.cur = self.arena[r].next();
        Some(r)
    }
}
