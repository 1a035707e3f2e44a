//! Print support and integrity checks for the radix trie.

use std::collections::HashSet;

use super::{RadixNode, RadixTrie};
use crate::alphabet::ROOT_SYMBOL;
use crate::arena::NodeRef;
use crate::print::{Children, TreeNode};

/// Visit handle on a [`RadixTrie`] node.
#[derive(Clone, Copy)]
pub struct RadixHandle<'a> {
    trie: &'a RadixTrie,
    node: NodeRef,
}

impl<'a> RadixHandle<'a> {
    pub(super) fn new(trie: &'a RadixTrie, node: NodeRef) -> Self {
        Self { trie, node }
    }

    /// The node behind this handle.
    pub fn node(&self) -> &'a RadixNode {
        &self.trie.nodes[self.node]
    }

    /// Edge text of the node.
    pub fn edge(&self) -> &'a str {
        self.trie.edges.get(self.node().edge)
    }
}

impl<'a> TreeNode for RadixHandle<'a> {
    type Label = &'a str;

    fn label(&self) -> &'a str {
        self.edge()
    }

    fn children(&self) -> Children<Self> {
        self.trie
            .nodes
            .children(self.node)
            .map(|node| RadixHandle::new(self.trie, node))
            .collect()
    }
}

impl RadixTrie {
    /// Verify tree integrity - returns list of issues found.
    ///
    /// Beyond the shape checks shared with the list trie, every non-root
    /// edge must be non-empty and no two siblings may start with the same
    /// character.
    pub fn verify_integrity(&self) -> Vec<String> {
        let mut issues = Vec::new();
        let root = self.nodes.root();
        let mut placeholder = [0u8; 4];
        if self.edge(root) != ROOT_SYMBOL.encode_utf8(&mut placeholder) {
            issues.push(format!("root edge is {:?}", self.edge(root)));
        }

        let mut seen = vec![false; self.nodes.len()];

        // Explicit stack of (node, length of the parent's path), so deep keys
        // do not recurse.
        let mut path = String::new();
        let mut stack = vec![(root, 0)];
        while let Some((r, parent_len)) = stack.pop() {
            path.truncate(parent_len);
            if r != root {
                path.push_str(self.edge(r));
            }
            if std::mem::replace(&mut seen[r.as_usize()], true) {
                issues.push(format!("node at {path:?} is linked more than once"));
                continue;
            }

            let node = &self.nodes[r];
            if node.child.is_null() && !path.is_empty() && !node.is_word {
                issues.push(format!("leaf at {path:?} is not a word"));
            }

            let mut firsts = HashSet::new();
            let mut chain = HashSet::new();
            let mut children = Vec::new();
            for child in self.nodes.children(r) {
                if !chain.insert(child) {
                    issues.push(format!("sibling chain under {path:?} loops"));
                    break;
                }
                match self.edge(child).chars().next() {
                    Some(first) => {
                        if !firsts.insert(first) {
                            issues.push(format!("siblings under {path:?} share first char {first:?}"));
                        }
                    }
                    None => issues.push(format!("empty edge under {path:?}")),
                }
                children.push((child, path.len()));
            }
            stack.extend(children.into_iter().rev());
        }

        let unreachable = seen.iter().filter(|s| !**s).count();
        if unreachable > 0 {
            issues.push(format!("{unreachable} nodes are not reachable from the root"));
        }
        issues
    }
}
