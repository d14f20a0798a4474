//! Non-interactive UI for CI and headless environments.
//!
//! Prints bracketed status labels instead of icons, shows no spinners,
//! and never styles output.

use super::output::OutputMode;
use super::{SpinnerHandle, UserInterface};

/// UI implementation for CI/headless execution.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("[ok] {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        println!("[warn] {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("[FAIL] {}", msg);
    }

    fn show_header(&mut self, title: &str) {
        println!("=== {} ===", title);
    }

    fn show_hint(&mut self, hint: &str) {
        println!("{}", hint);
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        // No live spinner without a TTY; log the start instead.
        println!("... {}", message);
        Box::new(SilentSpinner)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that prints final status lines only.
struct SilentSpinner;

impl SpinnerHandle for SilentSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        println!("[ok] {}", msg);
    }

    fn finish_warning(&mut self, msg: &str) {
        println!("[warn] {}", msg);
    }

    fn finish_error(&mut self, msg: &str) {
        println!("[FAIL] {}", msg);
    }

    fn clear(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_interactive_reports_mode() {
        let ui = NonInteractiveUI::new(OutputMode::Normal);
        assert_eq!(ui.output_mode(), OutputMode::Normal);
        assert!(!ui.is_interactive());
    }

    #[test]
    fn spinner_lifecycle_does_not_panic() {
        let mut ui = NonInteractiveUI::new(OutputMode::Normal);
        let mut spinner = ui.start_spinner("probing weather server");
        spinner.set_message("still probing");
        spinner.finish_success("reachable");
    }
}
