//! Presentation abstraction for the calculator.
//!
//! The `CalcPanel` trait is what a front end implements: it shows the display
//! text and surfaces notices such as a divide-by-zero message. `HeadlessPanel`
//! records everything for tests.

/// Output side of a calculator front end.
pub trait CalcPanel {
    /// Show the current display text.
    fn render(&mut self, display: &str);

    /// Tell the user something went wrong (optional, can be no-op).
    fn notify(&mut self, _message: &str) {}
}

/// Headless panel for testing - captures rendered frames and notices.
#[derive(Debug, Default)]
pub struct HeadlessPanel {
    frames: Vec<String>,
    notices: Vec<String>,
}

impl HeadlessPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every display text rendered so far, oldest first.
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// Most recently rendered display text.
    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }

    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    /// Forget captured frames and notices.
    pub fn clear_history(&mut self) {
        self.frames.clear();
        self.notices.clear();
    }
}

impl CalcPanel for HeadlessPanel {
    fn render(&mut self, display: &str) {
        self.frames.push(display.to_string());
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_panel_frames() {
        let mut panel = HeadlessPanel::new();
        panel.render("0");
        panel.render("12");
        assert_eq!(panel.frames(), ["0", "12"]);
        assert_eq!(panel.last_frame(), Some("12"));
    }

    #[test]
    fn test_headless_panel_notices() {
        let mut panel = HeadlessPanel::new();
        panel.notify("oops");
        assert_eq!(panel.notices(), ["oops"]);
        panel.clear_history();
        assert!(panel.notices().is_empty());
        assert_eq!(panel.last_frame(), None);
    }
}
