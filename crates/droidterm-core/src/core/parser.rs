//! Input tokenizer.
//!
//! Splits a raw line on runs of whitespace. The first word becomes the
//! lower-cased command name; the rest are arguments, kept verbatim.

/// A tokenized command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub args: Vec<String>,
}

/// Tokenize a raw input line.
///
/// Returns `None` for blank input.
pub fn parse_input(input: &str) -> Option<ParsedCommand> {
    let mut words = input.split_whitespace();
    let name = words.next()?.to_lowercase();
    let args = words.map(str::to_string).collect();
    Some(ParsedCommand { name, args })
}
