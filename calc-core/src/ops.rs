//! Arithmetic operators.

use crate::error::{CalcError, CalcResult};

/// The four operator buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Keypad symbol for this operator.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => 'x',
            Operator::Divide => '/',
        }
    }
}

/// Apply `op` to the two operands.
///
/// Plain IEEE-754 double arithmetic. The only failure is a division whose
/// right operand compares equal to zero (`-0.0` included); overflow and NaN
/// propagate untouched.
pub fn apply(op: Operator, left: f64, right: f64) -> CalcResult<f64> {
    match op {
        Operator::Add => Ok(left + right),
        Operator::Subtract => Ok(left - right),
        Operator::Multiply => Ok(left * right),
        Operator::Divide => {
            if right == 0.0 {
                return Err(CalcError::DivideByZero);
            }
            Ok(left / right)
        }
    }
}
