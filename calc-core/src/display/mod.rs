//! Display handling for the calculator.
//!
//! The display text is the state of record for the number being typed:
//! - `DisplayBuffer`: bounded text buffer edited digit by digit
//! - `format_number` / `parse_number`: conversion between results and text

mod buffer;
mod format;

pub use buffer::{DisplayBuffer, DISPLAY_CAPACITY};
pub use format::{format_number, parse_number, SIGNIFICANT_DIGITS};
