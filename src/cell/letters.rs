//! `LetterBuffer`: The ordered letters typed so far.

use std::fmt;

/// The ordered sequence of entered letters.
///
/// The buffer does not know the cell count; the bound is passed in on every
/// push so it always reflects the cells discovered most recently. A push
/// past the bound is rejected, never truncated.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct LetterBuffer {
    letters: Vec<char>,
}

impl LetterBuffer {
    /// Create an empty buffer.
    pub const fn new() -> Self {
        Self {
            letters: Vec::new(),
        }
    }

    /// Append `letter` if fewer than `limit` letters are held.
    ///
    /// Returns `false` (and leaves the buffer untouched) when full.
    pub fn push(&mut self, letter: char, limit: usize) -> bool {
        if self.letters.len() >= limit {
            return false;
        }
        self.letters.push(letter);
        true
    }

    /// Remove and return the last letter, if any.
    pub fn pop(&mut self) -> Option<char> {
        self.letters.pop()
    }

    /// Drop every letter.
    pub fn clear(&mut self) {
        self.letters.clear();
    }

    /// Number of letters held.
    #[inline]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Check if the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get the letter in slot `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<char> {
        self.letters.get(index).copied()
    }

    /// All letters in insertion order.
    #[inline]
    pub fn as_slice(&self) -> &[char] {
        &self.letters
    }
}

impl fmt::Display for LetterBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.letters.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

impl fmt::Debug for LetterBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LetterBuffer({:?})", self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_until_full() {
        let mut letters = LetterBuffer::new();
        for c in "abc".chars() {
            assert!(letters.push(c, 3));
        }
        assert!(!letters.push('d', 3));
        assert_eq!(letters.to_string(), "abc");
    }

    #[test]
    fn test_push_with_zero_limit() {
        let mut letters = LetterBuffer::new();
        assert!(!letters.push('a', 0));
        assert!(letters.is_empty());
    }

    #[test]
    fn test_pop_and_clear() {
        let mut letters = LetterBuffer::new();
        assert_eq!(letters.pop(), None);

        letters.push('x', 5);
        letters.push('y', 5);
        assert_eq!(letters.pop(), Some('y'));
        assert_eq!(letters.as_slice(), &['x']);

        letters.clear();
        assert!(letters.is_empty());
        assert_eq!(letters.get(0), None);
    }
}
