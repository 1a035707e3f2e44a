//! Word list loading.
//!
//! The dictionary is memory-mapped and checked for UTF-8 once; lines are
//! then handed to the tries straight out of the mapping.

use std::fs::File;
use std::path::{Path, PathBuf};

use memmap2::Mmap;
use tracing::{debug, info};

use crate::error::LoadError;
use crate::Trie;

/// A memory-mapped word list, one key per line.
pub struct Dictionary {
    path: PathBuf,
    /// `None` for an empty file, which cannot be mapped.
    map: Option<Mmap>,
}

impl Dictionary {
    /// Map the file at `path` and check that it is UTF-8.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref().to_path_buf();
        let io_err = |source| LoadError::Io {
            path: path.clone(),
            source,
        };

        let file = File::open(&path).map_err(io_err)?;
        let len = file.metadata().map_err(io_err)?.len();
        let map = if len == 0 {
            None
        } else {
            // SAFETY: the mapping is read-only and lives as long as `self`.
            // Concurrent modification of the file by another process is
            // outside our control, as with any memory-mapped input.
            Some(unsafe { Mmap::map(&file) }.map_err(io_err)?)
        };

        let bytes = map.as_deref().unwrap_or_default();
        if let Err(e) = std::str::from_utf8(bytes) {
            let line = 1 + bytes[..e.valid_up_to()]
                .iter()
                .filter(|&&b| b == b'\n')
                .count();
            return Err(LoadError::Utf8 { path, line });
        }

        info!(path = %path.display(), bytes = len, "opened dictionary");
        Ok(Self { path, map })
    }

    /// Path the dictionary was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Size of the file in bytes.
    pub fn size_bytes(&self) -> u64 {
        self.map.as_ref().map_or(0, |m| m.len() as u64)
    }

    /// Size of the file in whole kilobytes.
    pub fn size_kb(&self) -> u64 {
        self.size_bytes() / 1024
    }

    /// The whole file.
    pub fn text(&self) -> &str {
        let bytes = self.map.as_deref().unwrap_or_default();
        // SAFETY: checked to be UTF-8 in `open`.
        unsafe { std::str::from_utf8_unchecked(bytes) }
    }

    /// Every line, without its `\n` or `\r\n` terminator.
    ///
    /// A final terminator does not start an extra empty line; blank lines
    /// inside the file are yielded as empty keys.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text().lines()
    }

    /// Insert every line into every trie and return the number of lines.
    ///
    /// Stops at the first line a trie rejects.
    pub fn load_into(&self, tries: &mut [Box<dyn Trie>]) -> Result<usize, LoadError> {
        let mut entries = 0;
        for (i, line) in self.lines().enumerate() {
            for trie in tries.iter_mut() {
                trie.try_insert(line).map_err(|source| LoadError::Insert {
                    variant: trie.kind(),
                    line: i + 1,
                    source,
                })?;
            }
            entries += 1;
        }

        for trie in tries.iter() {
            debug!(variant = %trie.kind(), nodes = trie.count(), "loaded");
        }
        info!(entries, "dictionary loaded");
        Ok(entries)
    }
}
