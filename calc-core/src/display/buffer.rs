//! DisplayBuffer - the text shown on the calculator's display.

use std::fmt;

use super::format::{format_number, parse_number};

/// Maximum number of characters the display holds.
pub const DISPLAY_CAPACITY: usize = 63;

/// Bounded display text.
///
/// Never empty and never longer than `DISPLAY_CAPACITY`. Characters pushed
/// past capacity are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayBuffer {
    text: String,
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayBuffer {
    /// Create a display showing `0`.
    pub fn new() -> Self {
        Self {
            text: String::from("0"),
        }
    }

    /// Current text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// True when the display holds no text. `set` never leaves it empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.text.len() >= DISPLAY_CAPACITY
    }

    pub fn has_decimal_point(&self) -> bool {
        self.text.contains('.')
    }

    /// True when the display reads exactly `0` (no decimal point).
    pub fn is_bare_zero(&self) -> bool {
        self.text == "0"
    }

    /// Replace the whole text. Input longer than capacity is cut.
    pub fn set(&mut self, text: &str) {
        self.text.clear();
        self.text.extend(text.chars().take(DISPLAY_CAPACITY));
        if self.text.is_empty() {
            self.text.push('0');
        }
    }

    /// Replace the text with a formatted number.
    pub fn set_number(&mut self, value: f64) {
        self.set(&format_number(value));
    }

    /// Append a character. Returns false if the display is full.
    pub fn push(&mut self, ch: char) -> bool {
        if self.is_full() {
            return false;
        }
        self.text.push(ch);
        true
    }

    /// Numeric value of the current text.
    pub fn value(&self) -> f64 {
        parse_number(&self.text)
    }
}

impl fmt::Display for DisplayBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zero() {
        let buf = DisplayBuffer::new();
        assert_eq!(buf.as_str(), "0");
        assert!(buf.is_bare_zero());
        assert!(!buf.has_decimal_point());
        assert_eq!(buf.value(), 0.0);
    }

    #[test]
    fn test_push_until_full() {
        let mut buf = DisplayBuffer::new();
        for _ in 1..DISPLAY_CAPACITY {
            assert!(buf.push('9'));
        }
        assert_eq!(buf.len(), DISPLAY_CAPACITY);
        assert!(buf.is_full());
        assert!(!buf.push('9'));
        assert_eq!(buf.len(), DISPLAY_CAPACITY);
    }

    #[test]
    fn test_set_truncates_and_never_empty() {
        let mut buf = DisplayBuffer::new();
        buf.set(&"1".repeat(100));
        assert_eq!(buf.len(), DISPLAY_CAPACITY);

        buf.set("");
        assert_eq!(buf.as_str(), "0");
        assert!(!buf.is_empty());
    }

    #[test]
    fn test_set_number() {
        let mut buf = DisplayBuffer::new();
        buf.set_number(2.5);
        assert_eq!(buf.to_string(), "2.5");
        assert_eq!(buf.value(), 2.5);
        assert!(!buf.is_bare_zero());
    }
}
