//! Front end application state.
//!
//! [`TerminalApp`] plays the renderer around a [`TerminalSession`]: it owns
//! the scrollback, the line being edited and the history cursor. It does no
//! I/O, so the key loop in [`crate::terminal`] stays a thin shell around it.

use droidterm_core::config::WELCOME_BANNER;
use droidterm_core::{CommandResult, HistoryCursor, OutputLine, TerminalSession};
use log::debug;

use crate::config::MAX_SCROLLBACK_LINES;
use crate::utils::RingBuffer;

/// User intent decoded from a key event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputAction {
    Insert(char),
    Backspace,
    Submit,
    HistoryOlder,
    HistoryNewer,
    /// Reserved for autocompletion
    Complete,
    Quit,
}

/// What the renderer should do after an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppEvent {
    Redraw,
    Ignored,
    Quit,
}

pub struct TerminalApp {
    session: TerminalSession,
    /// Visible output, bounded by `MAX_SCROLLBACK_LINES`
    scrollback: RingBuffer<OutputLine>,
    cursor: HistoryCursor,
    /// Line being edited
    input: String,
}

impl TerminalApp {
    /// Creates the app on a fresh session, optionally showing the welcome banner.
    pub fn new(show_banner: bool) -> Self {
        let mut scrollback = RingBuffer::new(MAX_SCROLLBACK_LINES);
        if show_banner {
            scrollback.extend(WELCOME_BANNER.lines().map(OutputLine::asset_line));
        }

        Self {
            session: TerminalSession::new(),
            scrollback,
            cursor: HistoryCursor::new(),
            input: String::new(),
        }
    }

    pub fn session(&self) -> &TerminalSession {
        &self.session
    }

    pub fn scrollback(&self) -> &RingBuffer<OutputLine> {
        &self.scrollback
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Apply one input action.
    pub fn handle(&mut self, action: InputAction) -> AppEvent {
        match action {
            InputAction::Insert(c) => {
                self.input.push(c);
                AppEvent::Redraw
            }
            InputAction::Backspace => {
                self.input.pop();
                AppEvent::Redraw
            }
            InputAction::Submit => {
                let line = std::mem::take(&mut self.input);
                self.submit(&line);
                AppEvent::Redraw
            }
            InputAction::HistoryOlder => match self.cursor.older(self.session.history()) {
                Some(text) => {
                    self.input = text.to_string();
                    AppEvent::Redraw
                }
                None => AppEvent::Ignored,
            },
            InputAction::HistoryNewer => match self.cursor.newer(self.session.history()) {
                Some(text) => {
                    self.input = text.to_string();
                    AppEvent::Redraw
                }
                None => AppEvent::Ignored,
            },
            InputAction::Complete => AppEvent::Ignored,
            InputAction::Quit => AppEvent::Quit,
        }
    }

    /// Run a line and record it, with its output, in the scrollback.
    ///
    /// The echoed prompt uses the path from before the command ran.
    pub fn submit(&mut self, line: &str) -> CommandResult {
        let prompt = self.session.prompt();
        let result = self.session.execute(line);
        self.cursor.reset();

        if result.clear_screen {
            debug!("clearing {} scrollback lines", self.scrollback.len());
            self.scrollback.clear();
        } else {
            self.scrollback.push(OutputLine::command(prompt, line.trim()));
            self.scrollback.extend(result.output.iter().cloned());
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_line(app: &mut TerminalApp, line: &str) {
        for c in line.chars() {
            app.handle(InputAction::Insert(c));
        }
        app.handle(InputAction::Submit);
    }

    fn scrollback_text(app: &TerminalApp) -> Vec<String> {
        app.scrollback().iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_banner() {
        let app = TerminalApp::new(true);
        assert_eq!(app.scrollback().len(), WELCOME_BANNER.lines().count());
        assert!(TerminalApp::new(false).scrollback().is_empty());
    }

    #[test]
    fn test_submit_echoes_prompt_and_output() {
        let mut app = TerminalApp::new(false);
        type_line(&mut app, "cd projects");
        type_line(&mut app, "pwd");

        assert_eq!(
            scrollback_text(&app),
            vec![
                "root@android:/home$ cd projects",
                "",
                "root@android:/home/projects$ pwd",
                "/home/projects",
            ]
        );
        assert!(app.input().is_empty());
    }

    #[test]
    fn test_clear_discards_scrollback() {
        let mut app = TerminalApp::new(true);
        type_line(&mut app, "ls");
        type_line(&mut app, "clear");
        assert!(app.scrollback().is_empty());

        type_line(&mut app, "whoami");
        assert_eq!(
            scrollback_text(&app),
            vec!["root@android:/home$ whoami", "root@android-terminal"]
        );
    }

    #[test]
    fn test_backspace() {
        let mut app = TerminalApp::new(false);
        app.handle(InputAction::Insert('l'));
        app.handle(InputAction::Insert('x'));
        app.handle(InputAction::Backspace);
        app.handle(InputAction::Insert('s'));
        assert_eq!(app.input(), "ls");

        app.handle(InputAction::Backspace);
        app.handle(InputAction::Backspace);
        assert_eq!(app.handle(InputAction::Backspace), AppEvent::Redraw);
        assert_eq!(app.input(), "");
    }

    #[test]
    fn test_history_recall() {
        let mut app = TerminalApp::new(false);
        assert_eq!(app.handle(InputAction::HistoryOlder), AppEvent::Ignored);

        type_line(&mut app, "ls");
        type_line(&mut app, "");
        type_line(&mut app, "pwd");

        app.handle(InputAction::HistoryOlder);
        assert_eq!(app.input(), "pwd");
        app.handle(InputAction::HistoryOlder);
        assert_eq!(app.input(), "ls");
        app.handle(InputAction::HistoryNewer);
        assert_eq!(app.input(), "pwd");
        app.handle(InputAction::HistoryNewer);
        assert_eq!(app.input(), "");

        // Recall does not add history
        assert_eq!(app.session().history(), ["ls", "pwd"]);
    }

    #[test]
    fn test_complete_is_reserved() {
        let mut app = TerminalApp::new(false);
        app.handle(InputAction::Insert('l'));
        assert_eq!(app.handle(InputAction::Complete), AppEvent::Ignored);
        assert_eq!(app.input(), "l");
    }

    #[test]
    fn test_quit() {
        let mut app = TerminalApp::new(false);
        assert_eq!(app.handle(InputAction::Quit), AppEvent::Quit);
    }
}
