//! Print support and integrity checks for the array trie.

use super::{ArrayNode, ArrayTrie};
use crate::alphabet::{self, ROOT_SYMBOL};
use crate::arena::NodeRef;
use crate::print::{Children, TreeNode};

/// Visit handle on an [`ArrayTrie`] node.
///
/// Array nodes do not store their own symbol; the handle carries the symbol
/// decoded from the parent slot it was reached through.
#[derive(Clone, Copy)]
pub struct ArrayHandle<'a> {
    trie: &'a ArrayTrie,
    node: NodeRef,
    symbol: char,
}

impl<'a> ArrayHandle<'a> {
    pub(super) fn root(trie: &'a ArrayTrie) -> Self {
        Self {
            trie,
            node: trie.nodes.root(),
            symbol: ROOT_SYMBOL,
        }
    }

    /// The node behind this handle.
    pub fn node(&self) -> &'a ArrayNode {
        &self.trie.nodes[self.node]
    }
}

impl TreeNode for ArrayHandle<'_> {
    type Label = char;

    fn label(&self) -> char {
        self.symbol
    }

    fn children(&self) -> Children<Self> {
        self.node()
            .children
            .iter()
            .enumerate()
            .filter_map(|(slot, c)| {
                c.get().map(|node| ArrayHandle {
                    trie: self.trie,
                    node,
                    symbol: alphabet::decode(slot),
                })
            })
            .collect()
    }
}

impl ArrayTrie {
    /// Verify tree integrity - returns list of issues found.
    pub fn verify_integrity(&self) -> Vec<String> {
        let mut issues = Vec::new();
        let mut seen = vec![false; self.nodes.len()];

        // Depth first with an explicit stack. Each entry carries the length
        // of its parent's path so `path` can be cut back before extending it.
        let mut path = String::new();
        let mut stack = vec![(self.nodes.root(), 0, None)];
        while let Some((r, parent_len, symbol)) = stack.pop() {
            path.truncate(parent_len);
            if let Some(symbol) = symbol {
                path.push(symbol);
            }

            if r.as_usize() >= seen.len() {
                issues.push(format!("link at {path:?} points outside the arena"));
                continue;
            }
            if std::mem::replace(&mut seen[r.as_usize()], true) {
                issues.push(format!("node at {path:?} has more than one parent"));
                continue;
            }

            let node = &self.nodes[r];
            let mut leaf = true;
            for (slot, child) in node.children.iter().enumerate().rev() {
                if let Some(child) = child.get() {
                    leaf = false;
                    stack.push((child, path.len(), Some(alphabet::decode(slot))));
                }
            }
            if leaf && !path.is_empty() && !node.is_word {
                issues.push(format!("leaf at {path:?} is not a word"));
            }
        }

        let unreachable = seen.iter().filter(|s| !**s).count();
        if unreachable > 0 {
            issues.push(format!("{unreachable} nodes are not reachable from the root"));
        }
        issues
    }
}
