//! Edge storage for the radix trie.
//!
//! All edge text lives in one append-only buffer and a node refers to its
//! edge by `(start, len)`. Splitting an edge only shortens one window and
//! creates another over the same bytes.

/// A window into an [`EdgeBuf`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Edge {
    start: u32,
    len: u32,
}

impl Edge {
    /// Length of the edge in bytes.
    #[inline]
    pub fn len(self) -> usize {
        self.len as usize
    }

    /// Check if the edge is empty. Only happens on a corrupt trie.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Split into `[0, at)` and `[at, len)`.
    ///
    /// `at` must fall on a character boundary of the edge text.
    #[inline]
    pub fn split_at(self, at: usize) -> (Edge, Edge) {
        debug_assert!(at <= self.len());
        let at = at as u32;
        (
            Edge {
                start: self.start,
                len: at,
            },
            Edge {
                start: self.start + at,
                len: self.len - at,
            },
        )
    }
}

/// Append-only text buffer backing every edge of one trie.
#[derive(Debug, Clone, Default)]
pub struct EdgeBuf {
    data: String,
}

impl EdgeBuf {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text` and return its window.
    ///
    /// # Panics
    /// Panics once the buffer outgrows 4GB.
    pub fn push(&mut self, text: &str) -> Edge {
        assert!(
            self.data.len() + text.len() <= u32::MAX as usize,
            "edge buffer exceeds 4GB"
        );
        let edge = Edge {
            start: self.data.len() as u32,
            len: text.len() as u32,
        };
        self.data.push_str(text);
        edge
    }

    /// Text of `edge`.
    #[inline]
    pub fn get(&self, edge: Edge) -> &str {
        let start = edge.start as usize;
        &self.data[start..start + edge.len()]
    }

    /// Bytes held, including text no longer referenced by any edge.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if nothing was pushed yet.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Length in bytes of the longest common prefix of `a` and `b` that ends on
/// a character boundary.
///
/// Two different characters may share leading UTF-8 bytes (`é` and `è` both
/// start with `0xC3`); those bytes are not part of the common prefix.
pub fn common_prefix(a: &str, b: &str) -> usize {
    let mut i = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    while !a.is_char_boundary(i) {
        i -= 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_get() {
        let mut buf = EdgeBuf::new();
        let a = buf.push("hello");
        let b = buf.push("world");

        assert_eq!(buf.get(a), "hello");
        assert_eq!(buf.get(b), "world");
        assert_eq!(buf.len(), 10);
    }

    #[test]
    fn test_split_shares_bytes() {
        let mut buf = EdgeBuf::new();
        let e = buf.push("carpet");
        let (head, tail) = e.split_at(3);

        assert_eq!(buf.get(head), "car");
        assert_eq!(buf.get(tail), "pet");
        assert_eq!(head.len() + tail.len(), e.len());
        assert_eq!(buf.len(), 6);
    }

    #[test]
    fn test_common_prefix() {
        assert_eq!(common_prefix("test", "team"), 2);
        assert_eq!(common_prefix("car", "carpet"), 3);
        assert_eq!(common_prefix("carpet", "car"), 3);
        assert_eq!(common_prefix("abc", "xyz"), 0);
        assert_eq!(common_prefix("", "abc"), 0);
        assert_eq!(common_prefix("same", "same"), 4);
    }

    #[test]
    fn test_common_prefix_respects_char_boundaries() {
        assert_eq!(common_prefix("café", "cafè"), 3);
        assert_eq!(common_prefix("é", "è"), 0);
        assert_eq!(common_prefix("日本", "日曜"), "日".len());
    }
}
