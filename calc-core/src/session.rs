//! Session - connects a calculator to a panel.
//!
//! Each key goes to the engine, failures are reported on the panel, and the
//! display is rendered again after every key.

use tracing::debug;

use crate::engine::Calculator;
use crate::error::CalcResult;
use crate::keypad::{parse_keys, Key};
use crate::panel::CalcPanel;

/// A calculator bound to a front end.
pub struct Session<P: CalcPanel> {
    calculator: Calculator,
    panel: P,
}

impl<P: CalcPanel> Session<P> {
    /// Create a session and render the initial display.
    pub fn new(panel: P) -> Self {
        let mut session = Self {
            calculator: Calculator::new(),
            panel,
        };
        session.refresh();
        session
    }

    /// Send one key to the calculator.
    ///
    /// On failure the engine has already cleared itself; the error message is
    /// shown on the panel, the reset display rendered, and the error returned.
    pub fn press(&mut self, key: Key) -> CalcResult<()> {
        let result = self.calculator.press(key);
        if let Err(ref e) = result {
            debug!(key = %key, error = %e, "calculator reset");
            self.panel.notify(&e.to_string());
        }
        self.refresh();
        result
    }

    /// Send a sequence of keys. Failures are reported and replay continues.
    ///
    /// Returns the number of keys that failed.
    pub fn press_all<I>(&mut self, keys: I) -> usize
    where
        I: IntoIterator<Item = Key>,
    {
        let mut failures = 0;
        for key in keys {
            if self.press(key).is_err() {
                failures += 1;
            }
        }
        failures
    }

    /// Parse and replay a key string such as `"5+3=="`.
    pub fn run_keys(&mut self, text: &str) -> CalcResult<usize> {
        let keys = parse_keys(text)?;
        Ok(self.press_all(keys))
    }

    /// Current display text.
    pub fn display(&self) -> &str {
        self.calculator.display_text()
    }

    /// The calculator driven by this session.
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// The front end.
    pub fn panel(&self) -> &P {
        &self.panel
    }

    /// Mutable access to the front end.
    pub fn panel_mut(&mut self) -> &mut P {
        &mut self.panel
    }

    /// Consume the session and return the front end.
    pub fn into_panel(self) -> P {
        self.panel
    }

    fn refresh(&mut self) {
        self.panel.render(self.calculator.display_text());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;
    use crate::panel::HeadlessPanel;

    #[test]
    fn test_initial_render() {
        let session = Session::new(HeadlessPanel::new());
        assert_eq!(session.panel().frames(), ["0"]);
    }

    #[test]
    fn test_renders_after_each_key() {
        let mut session = Session::new(HeadlessPanel::new());
        session.run_keys("12+3=").unwrap();
        assert_eq!(session.panel().frames(), ["0", "1", "12", "12", "3", "15"]);
        assert_eq!(session.display(), "15");
    }

    #[test]
    fn test_divide_by_zero_notifies() {
        let mut session = Session::new(HeadlessPanel::new());
        session.run_keys("8/0").unwrap();
        let err = session.press(Key::Equals).unwrap_err();
        assert!(matches!(err, CalcError::DivideByZero));
        assert_eq!(session.panel().notices(), ["Cannot divide by zero."]);
        assert_eq!(session.panel().last_frame(), Some("0"));
    }

    #[test]
    fn test_replay_continues_after_failure() {
        let mut session = Session::new(HeadlessPanel::new());
        let failures = session.run_keys("8/0= 2+2=").unwrap();
        assert_eq!(failures, 1);
        assert_eq!(session.display(), "4");
    }

    #[test]
    fn test_run_keys_rejects_unknown() {
        let mut session = Session::new(HeadlessPanel::new());
        assert!(matches!(
            session.run_keys("2?"),
            Err(CalcError::UnknownKey('?'))
        ));
        // Nothing was replayed
        assert_eq!(session.panel().frames(), ["0"]);
    }
}
