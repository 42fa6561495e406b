//! Line styling for the terminal renderer.

use crossterm::style::Stylize;
use droidterm_core::{OutputLine, OutputLineData, TerminalSession, TextStyle};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Render one output line with ANSI styling, cut to `width` columns.
pub fn styled(line: &OutputLine, width: usize) -> String {
    let text = line.to_string();
    if text.width() > width {
        return paint(line, &truncate(&text, width));
    }
    match &line.data {
        OutputLineData::Command { prompt, input } => {
            format!("{} {}", prompt.as_str().green().bold(), input)
        }
        _ => paint(line, &text),
    }
}

fn paint(line: &OutputLine, text: &str) -> String {
    match &line.data {
        OutputLineData::Error(_) => text.red().to_string(),
        OutputLineData::ListEntry {
            style: TextStyle::Directory,
            ..
        } => text.cyan().bold().to_string(),
        _ => text.to_string(),
    }
}

/// Longest prefix of `text` that fits in `width` display columns.
fn truncate(text: &str, width: usize) -> String {
    let mut used = 0;
    text.chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= width
        })
        .collect()
}

/// Status line padded to `width`: static label left, current path right.
pub fn status_line(session: &TerminalSession, width: usize) -> String {
    let (label, path) = session.status_line();
    let used = label.chars().count() + path.chars().count();
    let gap = width.saturating_sub(used).max(1);
    format!("{}{}{}", label, " ".repeat(gap), path)
}
