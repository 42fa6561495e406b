//! Terminal output types.

use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Kind marker for listing entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextStyle {
    Directory,
    File,
}

impl TextStyle {
    /// Prefix shown before the entry name.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Directory => "📁",
            Self::File => "📄",
        }
    }
}

/// A single line of terminal output.
///
/// The kind of line is set by whoever produces it, so renderers never have to
/// guess from the text whether a line is an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputLine {
    pub data: OutputLineData,
}

/// The actual content of an output line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputLineData {
    /// Echo of a submitted command, written by the renderer
    Command { prompt: String, input: String },
    /// Plain text output
    Text(String),
    /// Error message
    Error(String),
    /// Empty line
    Empty,
    /// Directory listing entry (ls)
    ListEntry { name: String, style: TextStyle },
}

impl OutputLine {
    fn new(data: OutputLineData) -> Self {
        Self { data }
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Text(s.into()))
    }

    /// Error line. Accepts any displayable error.
    pub fn error(e: impl fmt::Display) -> Self {
        Self::new(OutputLineData::Error(e.to_string()))
    }

    pub fn empty() -> Self {
        Self::new(OutputLineData::Empty)
    }

    /// One line of a text asset; blank lines become [`OutputLineData::Empty`].
    pub fn asset_line(s: &str) -> Self {
        if s.is_empty() {
            Self::empty()
        } else {
            Self::text(s)
        }
    }

    pub fn command(prompt: impl Into<String>, input: impl Into<String>) -> Self {
        Self::new(OutputLineData::Command {
            prompt: prompt.into(),
            input: input.into(),
        })
    }

    pub fn dir_entry(name: impl Into<String>) -> Self {
        Self::new(OutputLineData::ListEntry {
            name: name.into(),
            style: TextStyle::Directory,
        })
    }

    pub fn file_entry(name: impl Into<String>) -> Self {
        Self::new(OutputLineData::ListEntry {
            name: name.into(),
            style: TextStyle::File,
        })
    }

    pub fn is_error(&self) -> bool {
        matches!(self.data, OutputLineData::Error(_))
    }

    /// Short machine-readable tag for the line kind.
    pub fn kind(&self) -> &'static str {
        match self.data {
            OutputLineData::Command { .. } => "command",
            OutputLineData::Text(_) => "text",
            OutputLineData::Error(_) => "error",
            OutputLineData::Empty => "empty",
            OutputLineData::ListEntry {
                style: TextStyle::Directory,
                ..
            } => "dir",
            OutputLineData::ListEntry {
                style: TextStyle::File,
                ..
            } => "file",
        }
    }
}

impl fmt::Display for OutputLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data {
            OutputLineData::Command { prompt, input } => write!(f, "{} {}", prompt, input),
            OutputLineData::Text(s) | OutputLineData::Error(s) => f.write_str(s),
            OutputLineData::Empty => Ok(()),
            OutputLineData::ListEntry { name, style } => write!(f, "{} {}", style.marker(), name),
        }
    }
}

// Serialized as `{ "kind": ..., "text": ... }` so hosts get both the tag and
// the literal text without re-implementing `Display`.
impl Serialize for OutputLine {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("OutputLine", 2)?;
        state.serialize_field("kind", self.kind())?;
        state.serialize_field("text", &self.to_string())?;
        state.end()
    }
}
