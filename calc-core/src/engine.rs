//! Calculator engine - the pocket-calculator state machine.

use tracing::{debug, trace};

use crate::display::DisplayBuffer;
use crate::error::CalcResult;
use crate::keypad::Key;
use crate::ops::{apply, Operator};

/// Calculator state.
///
/// Owned by whatever drives it (a presentation layer or a test) and mutated
/// in place by each button operation.
#[derive(Debug, Clone)]
pub struct Calculator {
    /// Left operand carried across chained operations.
    accumulator: f64,
    /// Operand reused when equals is pressed again without new input.
    last_operand: f64,
    /// Operator applied when the next operand is available.
    pending: Option<Operator>,
    /// An operator has been committed and `accumulator` holds its left operand.
    has_pending: bool,
    /// The next digit starts a new number.
    entering_new: bool,
    /// The previous committed action was equals.
    last_was_equals: bool,
    display: DisplayBuffer,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator in its start state, showing `0`.
    pub fn new() -> Self {
        Self {
            accumulator: 0.0,
            last_operand: 0.0,
            pending: None,
            has_pending: false,
            entering_new: true,
            last_was_equals: false,
            display: DisplayBuffer::new(),
        }
    }

    /// Reset everything to the start state.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Text currently on the display.
    pub fn display_text(&self) -> &str {
        self.display.as_str()
    }

    /// Display buffer behind `display_text`.
    pub fn display(&self) -> &DisplayBuffer {
        &self.display
    }

    /// Left operand of the pending operation.
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// Right operand reused by repeated equals.
    pub fn last_operand(&self) -> f64 {
        self.last_operand
    }

    /// Operator waiting for its right operand.
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending
    }

    /// Type a digit (0-9). Other values are ignored.
    pub fn input_digit(&mut self, digit: u8) {
        if digit > 9 {
            return;
        }

        self.begin_fresh_entry_if_needed();

        if self.entering_new {
            self.display.set(&digit.to_string());
            self.entering_new = false;
        } else if self.display.is_bare_zero() {
            // Replace the lone zero instead of producing "05"
            self.display.set(&digit.to_string());
        } else {
            self.display.push(char::from(b'0' + digit));
        }

        self.last_was_equals = false;
    }

    /// Type the decimal point. A second point in the same number is ignored.
    pub fn input_decimal_point(&mut self) {
        self.begin_fresh_entry_if_needed();

        if self.entering_new {
            self.display.set("0.");
            self.entering_new = false;
        } else if !self.display.has_decimal_point() {
            self.display.push('.');
        }

        self.last_was_equals = false;
    }

    /// Commit an operator, evaluating any operator already pending.
    ///
    /// Evaluation is strictly left to right: `3 + 4 + 5` shows `7` when the
    /// second `+` is pressed. On divide by zero the calculator is cleared
    /// before the error is returned.
    pub fn apply_operator(&mut self, op: Operator) -> CalcResult<()> {
        let current = self.display.value();

        match (self.has_pending, self.pending) {
            (true, Some(pending)) => {
                let result = self.evaluate(pending, current)?;
                self.accumulator = result;
                self.display.set_number(result);
            }
            _ => {
                self.accumulator = current;
                self.has_pending = true;
            }
        }

        self.pending = Some(op);
        self.entering_new = true;
        self.last_was_equals = false;
        Ok(())
    }

    /// Press equals.
    ///
    /// Repeated presses keep applying the last operator and operand
    /// (`5 + 3 = =` shows `8` then `11`). The pending operator is left in
    /// place so this works; it is dropped once a new number is typed.
    pub fn apply_equals(&mut self) -> CalcResult<()> {
        let mut current = self.display.value();

        let Some(pending) = self.pending else {
            if !self.last_was_equals {
                self.accumulator = current;
                self.last_operand = current;
            }
            self.display.set_number(current);
            self.finish_equals();
            return Ok(());
        };

        if self.last_was_equals {
            current = self.last_operand;
        } else {
            self.last_operand = current;
        }

        let result = self.evaluate(pending, current)?;
        self.accumulator = result;
        self.display.set_number(result);
        self.finish_equals();
        Ok(())
    }

    /// Dispatch a keypad key to the matching operation.
    pub fn press(&mut self, key: Key) -> CalcResult<()> {
        trace!(?key, display = self.display_text(), "key press");
        match key {
            Key::Digit(d) => self.input_digit(d),
            Key::Decimal => self.input_decimal_point(),
            Key::Operator(op) => self.apply_operator(op)?,
            Key::Equals => self.apply_equals()?,
            Key::Clear => self.clear(),
        }
        Ok(())
    }

    fn evaluate(&mut self, op: Operator, right: f64) -> CalcResult<f64> {
        match apply(op, self.accumulator, right) {
            Ok(result) => Ok(result),
            Err(e) => {
                debug!(error = %e, left = self.accumulator, right, "evaluation failed, clearing");
                self.clear();
                Err(e)
            }
        }
    }

    fn finish_equals(&mut self) {
        self.entering_new = true;
        self.last_was_equals = true;
        self.has_pending = false;
    }

    /// Deferred reset after a finished calculation: runs on the first digit
    /// or point typed after equals, so repeated equals still works until then.
    fn begin_fresh_entry_if_needed(&mut self) {
        if self.entering_new && self.last_was_equals && !self.has_pending {
            self.pending = None;
            self.accumulator = 0.0;
            self.last_operand = 0.0;
            self.last_was_equals = false;
        }
    }
}
