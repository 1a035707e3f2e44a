//! Variant-agnostic tree rendering.
//!
//! A trie only has to hand out lightweight visit handles for its nodes
//! ([`TreeNode`]); the printer walks them depth first, left to right, and
//! draws the usual box-drawing connectors:
//!
//! ```text
//! └── -
//!     ├── c
//!     │   └── ar
//!     └── te
//!         ├── st
//!         └── am
//! ```
//!
//! The format is meant for eyeballing small tries and is not stable.

use std::fmt;
use std::io::{self, Write};

use smallvec::SmallVec;

/// Child handles of one node. Most nodes have only a few children.
pub type Children<N> = SmallVec<[N; 4]>;

/// A handle on one trie node, as seen by the printer.
pub trait TreeNode: Sized {
    /// What gets printed for this node.
    type Label: fmt::Display;

    /// Label of this node.
    fn label(&self) -> Self::Label;

    /// Handles on the children of this node, in traversal order.
    fn children(&self) -> Children<Self>;
}

const BRANCH: &str = "├── ";
const TAIL: &str = "└── ";
const BRANCH_INDENT: &str = "│   ";
const TAIL_INDENT: &str = "    ";

/// Render the tree below `root` into `out`.
///
/// The walk keeps its own stack, so arbitrarily deep tries can be printed.
pub fn write_tree<N: TreeNode>(root: &N, out: &mut dyn Write) -> io::Result<()> {
    // Each entry remembers how much of `prefix` belongs to its parent.
    let mut prefix = String::new();
    let mut stack: Vec<(N, usize, bool)> = Vec::new();

    let mut next = Some((root.children(), root.label(), 0, true));
    while let Some((children, label, parent_len, is_tail)) = next.take() {
        prefix.truncate(parent_len);
        let connector = if is_tail { TAIL } else { BRANCH };
        writeln!(out, "{prefix}{connector}{label}")?;

        if !children.is_empty() {
            prefix.push_str(if is_tail { TAIL_INDENT } else { BRANCH_INDENT });
            let last = children.len() - 1;
            // Reversed so the leftmost child is popped first.
            for (i, child) in children.into_iter().enumerate().rev() {
                stack.push((child, prefix.len(), i == last));
            }
        }

        next = stack
            .pop()
            .map(|(node, parent_len, is_tail)| (node.children(), node.label(), parent_len, is_tail));
    }
    Ok(())
}

/// Render the tree below `root` into a string.
pub fn render_tree<N: TreeNode>(root: &N) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_tree(root, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
