//! Print support and integrity checks for the list trie.

use std::collections::HashSet;

use super::{ListNode, ListTrie};
use crate::arena::NodeRef;
use crate::print::{Children, TreeNode};

/// Visit handle on a [`ListTrie`] node.
#[derive(Clone, Copy)]
pub struct ListHandle<'a> {
    trie: &'a ListTrie,
    node: NodeRef,
}

impl<'a> ListHandle<'a> {
    pub(super) fn new(trie: &'a ListTrie, node: NodeRef) -> Self {
        Self { trie, node }
    }

    /// The node behind this handle.
    pub fn node(&self) -> &'a ListNode {
        &self.trie.nodes[self.node]
    }
}

impl TreeNode for ListHandle<'_> {
    type Label = char;

    fn label(&self) -> char {
        self.node().symbol
    }

    fn children(&self) -> Children<Self> {
        self.trie
            .nodes
            .children(self.node)
            .map(|node| ListHandle::new(self.trie, node))
            .collect()
    }
}

impl ListTrie {
    /// Verify tree integrity - returns list of issues found.
    pub fn verify_integrity(&self) -> Vec<String> {
        let mut issues = Vec::new();
        let mut seen = vec![false; self.nodes.len()];

        // Explicit stack of (node, length of the parent's path), so deep keys
        // do not recurse.
        let mut path = String::new();
        let mut stack = vec![(self.nodes.root(), 0)];
        while let Some((r, parent_len)) = stack.pop() {
            path.truncate(parent_len);
            if r != self.nodes.root() {
                path.push(self.nodes[r].symbol);
            }
            if std::mem::replace(&mut seen[r.as_usize()], true) {
                issues.push(format!("node at {path:?} is linked more than once"));
                continue;
            }

            let node = &self.nodes[r];
            if node.child.is_null() && !path.is_empty() && !node.is_word {
                issues.push(format!("leaf at {path:?} is not a word"));
            }

            let mut symbols = HashSet::new();
            let mut chain = HashSet::new();
            let mut children = Vec::new();
            for child in self.nodes.children(r) {
                if !chain.insert(child) {
                    issues.push(format!("sibling chain under {path:?} loops"));
                    break;
                }
                let symbol = self.nodes[child].symbol;
                if !symbols.insert(symbol) {
                    issues.push(format!("duplicate sibling {symbol:?} under {path:?}"));
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
