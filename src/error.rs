//! Error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::TrieKind;

/// Errors raised when a trie cannot represent a key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    /// The key holds a symbol the fixed alphabet has no slot for.
    #[error("symbol {symbol:?} at position {position} is not in the alphabet")]
    Alphabet {
        /// The offending symbol
        symbol: char,
        /// Character index of `symbol` within the key
        position: usize,
    },
}

/// Errors raised while loading a dictionary into a set of tries.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be opened or mapped.
    #[error("cannot read dictionary `{}`: {source}", path.display())]
    Io {
        /// Dictionary path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The file is not UTF-8.
    #[error("dictionary `{}` is not valid UTF-8 (line {line})", path.display())]
    Utf8 {
        /// Dictionary path
        path: PathBuf,
        /// 1-based line holding the first invalid byte
        line: usize,
    },
    /// A trie rejected one of the lines.
    #[error("{variant} rejected line {line}: {source}")]
    Insert {
        /// Trie that rejected the line
        variant: TrieKind,
        /// 1-based line number
        line: usize,
        /// Why the line was rejected
        #[source]
        source: TrieError,
    },
}
