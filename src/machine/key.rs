//! Key events and their classification.
//!
//! Key identifiers follow the DOM `KeyboardEvent.key` convention: printable
//! keys are the character itself, everything else is a name such as
//! `"Backspace"` or `"ArrowLeft"`. Lengths and character codes are measured
//! in UTF-16 code units, as the DOM measures them.

use std::ops::RangeInclusive;

/// Character codes a printable key must fall in to be accepted.
///
/// Spans `'A'..='z'`, which also admits the six punctuation characters
/// between the two letter blocks (`[ \ ] ^ _` and backtick). Kept literal;
/// tightening it to letters only would change which keys fill a cell.
pub const ALLOWED_CHAR_CODES: RangeInclusive<u16> = 65..=122;

/// Key name of the backward-delete key.
pub const BACKSPACE: &str = "Backspace";

/// Key name of the forward-delete key, treated as backward delete.
pub const DELETE: &str = "Delete";

/// What a released key means to the letter row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyClass {
    /// A single-character key (not yet range checked).
    Printable(char),
    /// Backspace or Delete.
    DeleteBackward,
    /// Anything else.
    Other,
}

/// A keyboard release event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyUp {
    key: String,
}

impl KeyUp {
    /// Create an event for the key identifier `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// The textual key identifier.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Check if the identifier is exactly one UTF-16 code unit long.
    pub fn is_single_char(&self) -> bool {
        let mut units = self.key.encode_utf16();
        units.next().is_some() && units.next().is_none()
    }

    /// First UTF-16 code unit of the identifier.
    pub fn char_code(&self) -> Option<u16> {
        self.key.encode_utf16().next()
    }

    /// Check if the key is a single character inside [`ALLOWED_CHAR_CODES`].
    pub fn is_allowed_char(&self) -> bool {
        self.is_single_char()
            && self
                .char_code()
                .is_some_and(|code| ALLOWED_CHAR_CODES.contains(&code))
    }

    /// Classify the key.
    pub fn class(&self) -> KeyClass {
        if self.is_single_char() {
            // One UTF-16 unit in a valid string is always a whole char.
            if let Some(c) = self.key.chars().next() {
                return KeyClass::Printable(c);
            }
        }
        match self.key.as_str() {
            BACKSPACE | DELETE => KeyClass::DeleteBackward,
            _ => KeyClass::Other,
        }
    }
}

impl From<char> for KeyUp {
    fn from(c: char) -> Self {
        Self::new(c.to_string())
    }
}

impl From<&str> for KeyUp {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_printable() {
        assert_eq!(KeyUp::new("a").class(), KeyClass::Printable('a'));
        assert_eq!(KeyUp::new("Z").class(), KeyClass::Printable('Z'));
        assert_eq!(KeyUp::new("1").class(), KeyClass::Printable('1'));
        assert_eq!(KeyUp::new("é").class(), KeyClass::Printable('é'));
    }

    #[test]
    fn test_classify_delete() {
        assert_eq!(KeyUp::new("Backspace").class(), KeyClass::DeleteBackward);
        assert_eq!(KeyUp::new("Delete").class(), KeyClass::DeleteBackward);
    }

    #[test]
    fn test_classify_other() {
        assert_eq!(KeyUp::new("Enter").class(), KeyClass::Other);
        assert_eq!(KeyUp::new("Shift").class(), KeyClass::Other);
        assert_eq!(KeyUp::new("").class(), KeyClass::Other);
        // Two UTF-16 units, like the DOM reports it.
        assert_eq!(KeyUp::new("😀").class(), KeyClass::Other);
    }

    #[test]
    fn test_allowed_range_bounds() {
        assert!(KeyUp::from('A').is_allowed_char());
        assert!(KeyUp::from('z').is_allowed_char());
        assert!(!KeyUp::from('@').is_allowed_char());
        assert!(!KeyUp::from('{').is_allowed_char());
        assert!(!KeyUp::from(' ').is_allowed_char());
        assert!(!KeyUp::from("ab").is_allowed_char());
    }

    #[test]
    fn test_allowed_range_admits_punctuation_between_cases() {
        for c in ['[', '\\', ']', '^', '_', '`'] {
            assert!(KeyUp::from(c).is_allowed_char(), "{c:?}");
        }
    }

    #[test]
    fn test_char_code() {
        assert_eq!(KeyUp::new("a").char_code(), Some(97));
        assert_eq!(KeyUp::new("Backspace").char_code(), Some(66));
        assert_eq!(KeyUp::new("").char_code(), None);
    }
}
