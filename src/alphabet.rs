//! The closed alphabet indexed by [`ArrayTrie`](crate::ArrayTrie) slots and
//! the key normalization shared by every variant.
//!
//! Slots `0..26` hold the Latin letters (upper and lower case alias onto the
//! same slot, the lower-case letter being canonical), followed by the four
//! extra symbols found in the sample dictionary.

use crate::error::TrieError;

/// Number of slots in an array node.
pub const ALPHABET_SIZE: usize = 30;

/// Label of every root node. It never takes part in matching.
pub const ROOT_SYMBOL: char = '-';

const LETTERS: usize = 26;
const EXTRA: [char; ALPHABET_SIZE - LETTERS] = ['-', '\'', '2', '3'];

/// Map a symbol to its slot, or `None` if the alphabet has no slot for it.
#[inline]
pub fn slot(symbol: char) -> Option<usize> {
    match symbol {
        'a'..='z' => Some(symbol as usize - 'a' as usize),
        'A'..='Z' => Some(symbol as usize - 'A' as usize),
        '-' => Some(26),
        '\'' => Some(27),
        '2' => Some(28),
        '3' => Some(29),
        _ => None,
    }
}

/// Map a symbol to its slot.
///
/// `position` is the character index of `symbol` within the key and is only
/// used to report the violation.
#[inline]
pub fn encode(symbol: char, position: usize) -> Result<usize, TrieError> {
    slot(symbol).ok_or(TrieError::Alphabet { symbol, position })
}

/// Map a slot back to its canonical symbol.
///
/// # Panics
/// Panics if `slot >= ALPHABET_SIZE`. Slots only ever come from [`encode`].
#[inline]
pub fn decode(slot: usize) -> char {
    match slot {
        0..=25 => (b'a' + slot as u8) as char,
        26..=29 => EXTRA[slot - LETTERS],
        _ => panic!("slot {slot} is not in the alphabet"),
    }
}

/// Canonical form of a key symbol, applied by every variant before a symbol
/// is stored or compared.
#[inline]
pub fn fold(symbol: char) -> char {
    symbol.to_ascii_lowercase()
}

/// Every canonical symbol, in slot order.
pub fn symbols() -> impl Iterator<Item = char> {
    (0..ALPHABET_SIZE).map(decode)
}
