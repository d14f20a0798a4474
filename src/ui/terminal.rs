//! Terminal UI implementation.

use super::output::OutputMode;
use super::spinner::ProgressSpinner;
use super::theme::{should_use_colors, ScoutTheme};
use super::{NonInteractiveUI, SpinnerHandle, UserInterface};

/// UI implementation for interactive terminal sessions.
pub struct TerminalUI {
    theme: ScoutTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a terminal UI, picking a colored or plain theme from the
    /// environment.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            ScoutTheme::new()
        } else {
            ScoutTheme::plain()
        };
        Self { theme, mode }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    fn warning(&mut self, msg: &str) {
        println!("{}", self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn show_header(&mut self, title: &str) {
        println!("{}", self.theme.format_header(title));
        println!();
    }

    fn show_hint(&mut self, hint: &str) {
        println!("{}", self.theme.hint.apply_to(hint));
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

/// Create the appropriate UI for the current execution context.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_reports_mode() {
        let ui = TerminalUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
        assert!(ui.is_interactive());
    }

    #[test]
    fn create_ui_interactive_flag_selects_implementation() {
        let ui = create_ui(true, OutputMode::Normal);
        assert!(ui.is_interactive());

        let ui = create_ui(false, OutputMode::Normal);
        assert!(!ui.is_interactive());
    }

    #[test]
    fn quiet_terminal_spinner_is_hidden() {
        let mut ui = TerminalUI::new(OutputMode::Quiet);
        let mut spinner = ui.start_spinner("probing");
        spinner.clear();
    }
}
