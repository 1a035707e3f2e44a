//! Configuration for a comparison run.

use std::path::PathBuf;

use crate::{Trie, TrieKind};

/// Where the word list is looked up when none is given.
pub const DEFAULT_DICT_PATH: &str = "./dict/words.txt";

/// Configuration for loading a dictionary and comparing tries.
#[derive(Debug, Clone)]
pub struct Config {
    /// Word list, one key per line
    pub dict_path: PathBuf,
    /// Encodings to build; empty means all of them
    pub variants: Vec<TrieKind>,
    /// Render every trie after loading
    pub print_trees: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dict_path: PathBuf::from(DEFAULT_DICT_PATH),
            variants: TrieKind::ALL.to_vec(),
            print_trees: false,
        }
    }
}

impl Config {
    /// The encodings to build, in report order, without duplicates.
    pub fn kinds(&self) -> Vec<TrieKind> {
        TrieKind::ALL
            .into_iter()
            .filter(|k| self.variants.is_empty() || self.variants.contains(k))
            .collect()
    }

    /// One empty trie per selected encoding.
    pub fn build_tries(&self) -> Vec<Box<dyn Trie>> {
        self.kinds().into_iter().map(TrieKind::build).collect()
    }
}
