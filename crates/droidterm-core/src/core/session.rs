//! Terminal session state.
//!
//! A [`TerminalSession`] owns everything a command can read or change: the
//! current path, the namespace and the command history. It is created once
//! per interactive session and mutated in place by [`TerminalSession::execute`].

use log::debug;

use crate::config::{PROMPT_HOST, PROMPT_USER, STATUS_LABEL};
use crate::core::VirtualFs;
use crate::core::commands::{Command, CommandResult, execute_command};
use crate::core::parser::parse_input;
use crate::models::VirtualPath;

/// State of one simulated shell session.
#[derive(Clone, Debug)]
pub struct TerminalSession {
    /// Current working directory; always resolves to a directory.
    pub(crate) current_path: VirtualPath,
    /// Namespace, exclusively owned by this session.
    pub(crate) fs: VirtualFs,
    /// Submitted non-empty lines, oldest first.
    history: Vec<String>,
}

impl TerminalSession {
    /// Start a session on a fresh copy of the seed namespace.
    pub fn new() -> Self {
        Self::with_fs(VirtualFs::seed())
    }

    /// Start a session on a given namespace, at its root.
    pub(crate) fn with_fs(fs: VirtualFs) -> Self {
        Self {
            current_path: VirtualPath::home(),
            fs,
            history: Vec::new(),
        }
    }

    /// Run one input line.
    ///
    /// Blank input yields a single blank line and leaves the session
    /// untouched. Any other line is recorded in history, then dispatched.
    pub fn execute(&mut self, input: &str) -> CommandResult {
        let line = input.trim();
        let Some(parsed) = parse_input(line) else {
            return CommandResult::blank();
        };

        self.history.push(line.to_string());
        debug!("dispatch '{}' with {} args", parsed.name, parsed.args.len());

        let cmd = Command::parse(&parsed.name, &parsed.args);
        execute_command(cmd, self)
    }

    pub fn current_path(&self) -> &VirtualPath {
        &self.current_path
    }

    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    /// Previously entered commands, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Prompt string, e.g. `root@android:/home$`.
    pub fn prompt(&self) -> String {
        format!("{}@{}:{}$", PROMPT_USER, PROMPT_HOST, self.current_path)
    }

    /// Status line parts: static label and current path.
    pub fn status_line(&self) -> (&'static str, String) {
        (STATUS_LABEL, self.current_path.display())
    }
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OutputLine;

    #[test]
    fn test_new_session_starts_at_home() {
        let session = TerminalSession::new();
        assert_eq!(session.current_path().display(), "/home");
        assert!(session.history().is_empty());
        assert_eq!(session.prompt(), "root@android:/home$");
        assert_eq!(session.status_line(), ("Rust Runtime", "/home".to_string()));
    }

    #[test]
    fn test_with_fs_starts_at_root_of_given_tree() {
        let mut session = TerminalSession::with_fs(VirtualFs::empty());
        assert_eq!(session.current_path().display(), "/home");

        let result = session.execute("ls");
        assert_eq!(result.output, vec![OutputLine::empty(), OutputLine::empty()]);
        assert!(session.execute("cat readme.txt").is_error());
    }

    #[test]
    fn test_blank_input() {
        let mut session = TerminalSession::new();
        let before = session.clone();

        for input in ["", "   ", "\t\n"] {
            let result = session.execute(input);
            assert_eq!(result, CommandResult::blank());
        }
        assert!(session.history().is_empty());
        assert_eq!(session.current_path(), before.current_path());
        assert_eq!(session.fs(), before.fs());
    }

    #[test]
    fn test_history_records_trimmed_lines_in_order() {
        let mut session = TerminalSession::new();
        session.execute("  ls ");
        session.execute("");
        session.execute("bogus");
        session.execute("cd nope");

        assert_eq!(session.history(), ["ls", "bogus", "cd nope"]);
    }

    #[test]
    fn test_command_name_is_case_insensitive() {
        let mut session = TerminalSession::new();
        let lower = session.execute("echo Hi");
        let upper = session.execute("ECHO Hi");
        assert_eq!(lower, upper);
        assert_eq!(upper.output[0].to_string(), "Hi");
    }

    #[test]
    fn test_unknown_uses_lowercase_token() {
        let mut session = TerminalSession::new();
        let result = session.execute("FOO bar");
        assert_eq!(result.output.len(), 1);
        assert_eq!(
            result.output[0].to_string(),
            "foo: comando não encontrado. Digite 'help' para ver comandos disponíveis."
        );
    }

    #[test]
    fn test_prompt_follows_cd() {
        let mut session = TerminalSession::new();
        session.execute("cd projects");
        assert_eq!(session.prompt(), "root@android:/home/projects$");
    }

    #[test]
    fn test_sessions_do_not_share_namespace() {
        let mut first = TerminalSession::new();
        first.execute("mkdir shared");

        let mut second = TerminalSession::new();
        let result = second.execute("cd shared");
        assert!(result.is_error());
    }
}
