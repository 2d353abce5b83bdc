//! Keypad keys and button layout.
//!
//! A layout is a grid of buttons, each with a label, the key it sends, its
//! row and column, and how many columns it spans. Layouts can be loaded from
//! JSON:
//!
//! ```json
//! {
//!   "columns": 4,
//!   "buttons": [
//!     { "label": "C", "key": "C", "row": 0, "col": 0, "span": 2 },
//!     { "label": "7", "key": "7", "row": 1, "col": 0 }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CalcError, CalcResult};
use crate::ops::Operator;

/// A calculator button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Key {
    /// Digit 0-9
    Digit(u8),
    /// Decimal point
    Decimal,
    /// One of + - x /
    Operator(Operator),
    Equals,
    Clear,
}

impl Key {
    /// Every key on a standard keypad.
    pub const ALL: [Key; 17] = [
        Key::Digit(0),
        Key::Digit(1),
        Key::Digit(2),
        Key::Digit(3),
        Key::Digit(4),
        Key::Digit(5),
        Key::Digit(6),
        Key::Digit(7),
        Key::Digit(8),
        Key::Digit(9),
        Key::Decimal,
        Key::Operator(Operator::Add),
        Key::Operator(Operator::Subtract),
        Key::Operator(Operator::Multiply),
        Key::Operator(Operator::Divide),
        Key::Equals,
        Key::Clear,
    ];

    /// Map a typed character to a key.
    ///
    /// `*`, `x` and `X` all mean multiply; `=` and newline mean equals;
    /// `c` and `C` mean clear.
    pub fn from_char(ch: char) -> Option<Key> {
        let key = match ch {
            '0'..='9' => Key::Digit(ch as u8 - b'0'),
            '.' => Key::Decimal,
            '+' => Key::Operator(Operator::Add),
            '-' => Key::Operator(Operator::Subtract),
            '*' | 'x' | 'X' => Key::Operator(Operator::Multiply),
            '/' => Key::Operator(Operator::Divide),
            '=' | '\n' | '\r' => Key::Equals,
            'c' | 'C' => Key::Clear,
            _ => return None,
        };
        Some(key)
    }

    /// Canonical character for this key (inverse of `from_char`).
    pub fn symbol(self) -> char {
        match self {
            Key::Digit(d) => char::from(b'0' + d.min(9)),
            Key::Decimal => '.',
            Key::Operator(op) => op.symbol(),
            Key::Equals => '=',
            Key::Clear => 'C',
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<String> for Key {
    type Error = CalcError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Key::from_char(ch).ok_or(CalcError::UnknownKey(ch)),
            _ => Err(CalcError::Layout(format!("key must be one character: {:?}", s))),
        }
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.symbol().to_string()
    }
}

/// Parse a string of key characters, e.g. `"12+3="`. Whitespace is skipped.
///
/// # Examples
/// ```
/// use calc_core::{parse_keys, Key};
/// let keys = parse_keys("1 + 2 =").unwrap();
/// assert_eq!(keys.len(), 4);
/// assert_eq!(keys[3], Key::Equals);
/// ```
pub fn parse_keys(text: &str) -> CalcResult<Vec<Key>> {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| Key::from_char(c).ok_or(CalcError::UnknownKey(c)))
        .collect()
}

fn default_span() -> u8 {
    1
}

fn default_columns() -> u8 {
    4
}

/// One button on the keypad.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonDef {
    pub label: String,
    pub key: Key,
    pub row: u8,
    pub col: u8,
    /// Number of columns the button covers.
    #[serde(default = "default_span")]
    pub span: u8,
}

impl ButtonDef {
    pub fn new(label: &str, key: Key, row: u8, col: u8, span: u8) -> Self {
        Self {
            label: label.to_string(),
            key,
            row,
            col,
            span,
        }
    }

    fn covers(&self, row: u8, col: u8) -> bool {
        self.row == row
            && col >= self.col
            && u16::from(col) < u16::from(self.col) + u16::from(self.span)
    }
}

/// Keypad grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeypadLayout {
    #[serde(default = "default_columns")]
    pub columns: u8,
    pub buttons: Vec<ButtonDef>,
}

impl Default for KeypadLayout {
    fn default() -> Self {
        Self::standard()
    }
}

impl KeypadLayout {
    /// The classic four-column keypad.
    pub fn standard() -> Self {
        use Operator::*;

        let buttons = vec![
            ButtonDef::new("C", Key::Clear, 0, 0, 2),
            ButtonDef::new("/", Key::Operator(Divide), 0, 3, 1),
            ButtonDef::new("7", Key::Digit(7), 1, 0, 1),
            ButtonDef::new("8", Key::Digit(8), 1, 1, 1),
            ButtonDef::new("9", Key::Digit(9), 1, 2, 1),
            ButtonDef::new("x", Key::Operator(Multiply), 1, 3, 1),
            ButtonDef::new("4", Key::Digit(4), 2, 0, 1),
            ButtonDef::new("5", Key::Digit(5), 2, 1, 1),
            ButtonDef::new("6", Key::Digit(6), 2, 2, 1),
            ButtonDef::new("-", Key::Operator(Subtract), 2, 3, 1),
            ButtonDef::new("1", Key::Digit(1), 3, 0, 1),
            ButtonDef::new("2", Key::Digit(2), 3, 1, 1),
            ButtonDef::new("3", Key::Digit(3), 3, 2, 1),
            ButtonDef::new("+", Key::Operator(Add), 3, 3, 1),
            ButtonDef::new("0", Key::Digit(0), 4, 0, 2),
            ButtonDef::new(".", Key::Decimal, 4, 2, 1),
            ButtonDef::new("=", Key::Equals, 4, 3, 1),
        ];

        Self {
            columns: 4,
            buttons,
        }
    }

    /// Parse and validate a JSON layout.
    pub fn from_json(text: &str) -> CalcResult<Self> {
        let layout: KeypadLayout = serde_json::from_str(text)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Check that buttons fit the grid, do not overlap and use distinct keys.
    pub fn validate(&self) -> CalcResult<()> {
        if self.columns == 0 {
            return Err(CalcError::Layout("layout has no columns".to_string()));
        }

        let mut cells = HashSet::new();
        let mut keys = HashSet::new();

        for button in &self.buttons {
            if let Key::Digit(d) = button.key {
                if d > 9 {
                    return Err(CalcError::Layout(format!(
                        "button {:?} sends digit {} outside 0-9",
                        button.label, d
                    )));
                }
            }
            if button.span == 0 {
                return Err(CalcError::Layout(format!(
                    "button {:?} has zero span",
                    button.label
                )));
            }
            if u16::from(button.col) + u16::from(button.span) > u16::from(self.columns) {
                return Err(CalcError::Layout(format!(
                    "button {:?} overflows {} columns",
                    button.label, self.columns
                )));
            }
            if !keys.insert(button.key) {
                return Err(CalcError::Layout(format!(
                    "key {} appears more than once",
                    button.key
                )));
            }
            for col in button.col..button.col + button.span {
                if !cells.insert((button.row, col)) {
                    return Err(CalcError::Layout(format!(
                        "button {:?} overlaps cell ({}, {})",
                        button.label, button.row, col
                    )));
                }
            }
        }

        Ok(())
    }

    /// Number of rows in the grid.
    pub fn rows(&self) -> u8 {
        self.buttons
            .iter()
            .map(|b| b.row.saturating_add(1))
            .max()
            .unwrap_or(0)
    }

    /// Button covering the given cell, if any.
    pub fn button_at(&self, row: u8, col: u8) -> Option<&ButtonDef> {
        self.buttons.iter().find(|b| b.covers(row, col))
    }

    /// Button that sends `key`, if any.
    pub fn button_for(&self, key: Key) -> Option<&ButtonDef> {
        self.buttons.iter().find(|b| b.key == key)
    }

    /// Draw the grid as text, one string per row.
    ///
    /// Each cell is `cell_width` characters with `gap` spaces between cells;
    /// a button spanning `n` columns is `cell_width * n + gap * (n - 1)` wide.
    pub fn render_rows(&self, cell_width: usize, gap: usize) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.rows() as usize);

        for row in 0..self.rows() {
            let mut line = String::new();
            let mut col = 0;
            while col < self.columns {
                if col > 0 {
                    line.push_str(&" ".repeat(gap));
                }
                match self.button_at(row, col) {
                    Some(button) => {
                        let span = button.span as usize;
                        let width = cell_width * span + gap * (span - 1);
                        line.push_str(&render_button(&button.label, width));
                        col = button.col.saturating_add(button.span);
                    }
                    None => {
                        line.push_str(&" ".repeat(cell_width));
                        col += 1;
                    }
                }
            }
            lines.push(line.trim_end().to_string());
        }

        lines
    }
}

fn render_button(label: &str, width: usize) -> String {
    if width < 2 {
        return label.chars().take(width).collect();
    }
    format!("[{:^w$}]", label, w = width - 2)
}

/// Load and validate a keypad layout from a JSON file.
pub fn load_layout_from_path(path: impl AsRef<Path>) -> CalcResult<KeypadLayout> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let layout = KeypadLayout::from_json(&text)?;
    debug!(
        path = %path.display(),
        buttons = layout.buttons.len(),
        "loaded keypad layout"
    );
    Ok(layout)
}
