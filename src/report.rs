//! Side-by-side comparison of loaded tries.

use std::fmt;

use crate::dict::Dictionary;
use crate::{Trie, TrieKind, TrieStats};

/// One line of the comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    /// Encoding measured
    pub kind: TrieKind,
    /// Node count and estimated footprint
    pub stats: TrieStats,
}

/// Dictionary summary plus one row per trie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Dictionary size in whole kilobytes
    pub dict_kb: u64,
    /// Number of lines loaded
    pub entries: usize,
    /// One row per trie, in the order given
    pub rows: Vec<Row>,
}

impl Report {
    /// Measure every trie loaded from `dict`.
    pub fn collect(dict: &Dictionary, entries: usize, tries: &[Box<dyn Trie>]) -> Self {
        Self {
            dict_kb: dict.size_kb(),
            entries,
            rows: tries
                .iter()
                .map(|t| Row {
                    kind: t.kind(),
                    stats: t.stats(),
                })
                .collect(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dictionary Size    : {}Kb", self.dict_kb)?;
        writeln!(f, "Dictionary Entries : {} words", self.entries)?;
        writeln!(f)?;
        writeln!(f, "| {:<15} | {:<10} | {}", "Type", "Nodes", "Mem Size (Kb)")?;
        writeln!(f, "{}", "=".repeat(45))?;
        for row in &self.rows {
            writeln!(
                f,
                "| {:<15} | {:<10} | {}",
                row.kind.name(),
                row.stats.nodes,
                row.stats.bytes / 1024
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let report = Report {
            dict_kb: 12,
            entries: 1000,
            rows: vec![
                Row {
                    kind: TrieKind::Array,
                    stats: TrieStats {
                        nodes: 2500,
                        bytes: 310_000,
                    },
                },
                Row {
                    kind: TrieKind::Radix,
                    stats: TrieStats {
                        nodes: 1400,
                        bytes: 1023,
                    },
                },
            ],
        };

        let expected = "\
Dictionary Size    : 12Kb
Dictionary Entries : 1000 words

| Type            | Nodes      | Mem Size (Kb)
=============================================
| Array trie      | 2500       | 302
| Radix trie      | 1400       | 0
";
        assert_eq!(report.to_string(), expected);
    }
}
