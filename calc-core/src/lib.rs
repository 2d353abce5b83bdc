//! Four-Function Calculator Core
//!
//! This crate provides the pieces of a pocket calculator:
//! - Engine: the button-press state machine (chained operators, repeated equals)
//! - Display buffer and `%.15g`-style number formatting
//! - Keypad keys and button layouts
//! - Panel abstraction for front ends
//!
//! # Architecture
//!
//! The engine knows nothing about presentation:
//! - `Calculator`: state plus one method per button
//! - `CalcPanel` trait: renders display text and shows notices
//! - `Session`: feeds keys to a `Calculator` and keeps a `CalcPanel` up to date
//!
//! ```
//! use calc_core::{Calculator, Operator};
//!
//! let mut calc = Calculator::new();
//! calc.input_digit(5);
//! calc.apply_operator(Operator::Add).unwrap();
//! calc.input_digit(3);
//! calc.apply_equals().unwrap();
//! assert_eq!(calc.display_text(), "8");
//! calc.apply_equals().unwrap();
//! assert_eq!(calc.display_text(), "11");
//! ```

pub mod display;
pub mod engine;
pub mod error;
pub mod keypad;
pub mod ops;
pub mod panel;
pub mod session;

pub use display::{format_number, parse_number, DisplayBuffer, DISPLAY_CAPACITY};
pub use engine::Calculator;
pub use error::{CalcError, CalcResult};
pub use keypad::{load_layout_from_path, parse_keys, ButtonDef, Key, KeypadLayout};
pub use ops::{apply, Operator};
pub use panel::{CalcPanel, HeadlessPanel};
pub use session::Session;
