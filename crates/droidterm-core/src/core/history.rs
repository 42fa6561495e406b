//! Index-based recall over a session's command history.
//!
//! The cursor only reads the history slice; recalling entries never changes
//! the session.

/// Position of the renderer while browsing history.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HistoryCursor {
    /// `None` while editing a fresh line
    index: Option<usize>,
}

impl HistoryCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the recalled entry, if browsing.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Leave history browsing (after a line is submitted).
    pub fn reset(&mut self) {
        self.index = None;
    }

    /// Step to an older entry.
    ///
    /// Returns the text to put in the input field, or `None` to leave it as
    /// is. Stops at the oldest entry.
    pub fn older<'a>(&mut self, history: &'a [String]) -> Option<&'a str> {
        if history.is_empty() {
            return None;
        }
        let index = match self.index {
            None => history.len() - 1,
            Some(i) => i.saturating_sub(1).min(history.len() - 1),
        };
        self.index = Some(index);
        Some(&history[index])
    }

    /// Step to a newer entry.
    ///
    /// Moving past the newest entry leaves browsing and returns an empty
    /// input. Returns `None` when not browsing.
    pub fn newer<'a>(&mut self, history: &'a [String]) -> Option<&'a str> {
        let current = self.index?;
        let index = current + 1;
        if index >= history.len() {
            self.index = None;
            return Some("");
        }
        self.index = Some(index);
        Some(&history[index])
    }
}
