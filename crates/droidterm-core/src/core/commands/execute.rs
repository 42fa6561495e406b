//! Command execution logic.
//!
//! Contains the `execute_command` function that runs parsed commands
//! against the session and returns results. Failures are reported as error
//! lines and never change the session.

use chrono::{DateTime, Datelike, Local, Locale, TimeZone};
use log::debug;

use crate::config::{DATE_FORMAT, HELP_TEXT, IDENTITY, SYSTEM_BANNER, WEEKDAYS};
use crate::core::error::{CommandError, EntryKind};
use crate::core::session::TerminalSession;
use crate::models::{FsEntry, OutputLine, TextStyle, VirtualPath};

use super::{CdTarget, Command, CommandResult, PathArg};

/// Execute a parsed command and return output lines.
///
/// `cd`, `mkdir` and `touch` mutate the session on success.
pub fn execute_command(cmd: Command, session: &mut TerminalSession) -> CommandResult {
    match cmd {
        Command::Help => {
            CommandResult::output(HELP_TEXT.lines().map(OutputLine::asset_line).collect())
        }
        Command::Clear => CommandResult::clear(),
        Command::Ls => execute_ls(session),
        Command::Pwd => CommandResult::line(OutputLine::text(session.current_path.display())),
        Command::Cd(target) => execute_cd(target, session),
        Command::Cat(file) => execute_cat(&file, session),
        Command::Echo(text) => CommandResult::line(OutputLine::text(text)),
        Command::Date => CommandResult::line(OutputLine::text(format_date(&Local::now()))),
        Command::Whoami => CommandResult::line(OutputLine::text(IDENTITY)),
        Command::Uname => CommandResult::line(OutputLine::text(SYSTEM_BANNER)),
        Command::Mkdir(name) => execute_create(EntryKind::Directory, name, session),
        Command::Touch(name) => execute_create(EntryKind::File, name, session),
        Command::Invalid(err) => err.into(),
        Command::Unknown(name) => CommandError::NotFound(name).into(),
    }
}

/// Execute `ls` command.
fn execute_ls(session: &TerminalSession) -> CommandResult {
    match session.fs.list_dir(&session.current_path) {
        Ok(entries) => {
            let mut lines = Vec::with_capacity(entries.len() + 2);
            lines.push(OutputLine::empty());
            lines.extend(entries.into_iter().map(|entry| match entry.style {
                TextStyle::Directory => OutputLine::dir_entry(entry.name),
                TextStyle::File => OutputLine::file_entry(entry.name),
            }));
            lines.push(OutputLine::empty());
            CommandResult::output(lines)
        }
        Err(err) => {
            debug!("ls: {} unresolvable: {}", session.current_path, err);
            CommandError::DirectoryNotFound(None).into()
        }
    }
}

/// Execute `cd` command.
///
/// The target is checked before the current path changes.
fn execute_cd(target: CdTarget, session: &mut TerminalSession) -> CommandResult {
    let next = match target {
        CdTarget::Home => VirtualPath::home(),
        CdTarget::Parent => session.current_path.parent(),
        CdTarget::Child(name) => {
            let candidate = session.current_path.join(name.as_str());
            if !session.fs.is_directory(&candidate) {
                return CommandError::DirectoryNotFound(Some(name.to_string())).into();
            }
            candidate
        }
    };
    debug!("cd: {} -> {}", session.current_path, next);
    session.current_path = next;
    CommandResult::blank()
}

/// Execute `cat` command.
fn execute_cat(file: &PathArg, session: &TerminalSession) -> CommandResult {
    let content = session
        .fs
        .lookup_in(&session.current_path, file.as_str())
        .ok()
        .and_then(FsEntry::content);

    match content {
        Some(text) => {
            let mut lines = vec![OutputLine::empty()];
            if text.is_empty() {
                lines.push(OutputLine::empty());
            } else {
                lines.extend(text.lines().map(OutputLine::text));
            }
            lines.push(OutputLine::empty());
            CommandResult::output(lines)
        }
        None => CommandError::FileNotFound(file.to_string()).into(),
    }
}

/// Execute `mkdir` or `touch`.
fn execute_create(kind: EntryKind, name: PathArg, session: &mut TerminalSession) -> CommandResult {
    let node = match kind {
        EntryKind::Directory => FsEntry::directory(),
        EntryKind::File => FsEntry::empty_file(),
    };

    match session
        .fs
        .insert_at(&session.current_path, name.as_str(), node)
    {
        Ok(()) => CommandResult::blank(),
        Err(err) => {
            debug!("create '{}' in {} failed: {}", name, session.current_path, err);
            CommandError::NameConflict {
                kind,
                name: name.to_string(),
            }
            .into()
        }
    }
}

/// Long pt-BR date and time, e.g. `segunda-feira, 15 de janeiro de 2024 14:05:09`.
pub(crate) fn format_date<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let weekday = WEEKDAYS[now.weekday().num_days_from_sunday() as usize];
    format!("{}, {}", weekday, now.format_localized(DATE_FORMAT, Locale::pt_BR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OutputLineData;
    use chrono::Utc;

    fn run(session: &mut TerminalSession, name: &str, args: &[&str]) -> CommandResult {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        execute_command(Command::parse(name, &args), session)
    }

    fn texts(result: &CommandResult) -> Vec<String> {
        result.output.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_help_lists_every_command() {
        let mut session = TerminalSession::new();
        let result = run(&mut session, "help", &[]);
        let text = texts(&result).join("\n");
        for cmd in [
            "ls", "cd", "pwd", "cat", "clear", "echo", "date", "whoami", "uname", "mkdir",
            "touch", "help",
        ] {
            assert!(text.contains(&format!("  {} ", cmd)), "help is missing {}", cmd);
        }
        assert!(!result.clear_screen);
    }

    #[test]
    fn test_help_blank_lines_are_empty() {
        let mut session = TerminalSession::new();
        let result = run(&mut session, "help", &[]);
        let blanks: Vec<_> = result
            .output
            .iter()
            .filter(|line| line.to_string().is_empty())
            .collect();
        assert!(!blanks.is_empty());
        assert!(blanks.iter().all(|line| line.data == OutputLineData::Empty));
    }

    #[test]
    fn test_clear_is_sentinel() {
        let mut session = TerminalSession::new();
        let result = run(&mut session, "clear", &[]);
        assert!(result.clear_screen);
        assert!(result.output.is_empty());
    }

    #[test]
    fn test_ls_seed() {
        let mut session = TerminalSession::new();
        let result = run(&mut session, "ls", &[]);
        assert_eq!(
            texts(&result),
            vec!["", "📄 readme.txt", "📁 projects", "📁 documents", ""]
        );
    }

    #[test]
    fn test_ls_empty_directory() {
        let mut session = TerminalSession::new();
        run(&mut session, "cd", &["documents"]);
        assert_eq!(texts(&run(&mut session, "ls", &[])), vec!["", ""]);
    }

    #[test]
    fn test_cd_and_pwd() {
        let mut session = TerminalSession::new();
        assert_eq!(texts(&run(&mut session, "pwd", &[])), vec!["/home"]);

        let result = run(&mut session, "cd", &["projects"]);
        assert_eq!(texts(&result), vec![""]);
        assert_eq!(texts(&run(&mut session, "pwd", &[])), vec!["/home/projects"]);

        run(&mut session, "cd", &[]);
        assert_eq!(texts(&run(&mut session, "pwd", &[])), vec!["/home"]);
    }

    #[test]
    fn test_cd_failures_keep_path() {
        let mut session = TerminalSession::new();
        run(&mut session, "cd", &["projects"]);

        let result = run(&mut session, "cd", &["nope"]);
        assert_eq!(texts(&result), vec!["cd: nope: Diretório não encontrado"]);
        assert!(result.is_error());
        assert_eq!(session.current_path().display(), "/home/projects");

        let result = run(&mut session, "cd", &["app.js"]);
        assert_eq!(texts(&result), vec!["cd: app.js: Diretório não encontrado"]);
        assert_eq!(session.current_path().display(), "/home/projects");
    }

    #[test]
    fn test_cd_parent_at_root_is_noop() {
        let mut session = TerminalSession::new();
        let result = run(&mut session, "cd", &[".."]);
        assert_eq!(texts(&result), vec![""]);
        assert!(session.current_path().is_root());
    }

    #[test]
    fn test_cat_file() {
        let mut session = TerminalSession::new();
        let result = run(&mut session, "cat", &["readme.txt"]);
        assert_eq!(
            texts(&result),
            vec![
                "",
                "Bem-vindo ao Terminal Android!",
                "Use \"help\" para ver comandos disponíveis.",
                ""
            ]
        );
    }

    #[test]
    fn test_cat_failures() {
        let mut session = TerminalSession::new();
        assert_eq!(
            texts(&run(&mut session, "cat", &["projects"])),
            vec!["cat: projects: Arquivo não encontrado"]
        );
        assert_eq!(
            texts(&run(&mut session, "cat", &["missing.txt"])),
            vec!["cat: missing.txt: Arquivo não encontrado"]
        );
        assert_eq!(
            texts(&run(&mut session, "cat", &[])),
            vec!["cat: faltando operando arquivo"]
        );
    }

    #[test]
    fn test_fixed_strings() {
        let mut session = TerminalSession::new();
        assert_eq!(
            texts(&run(&mut session, "whoami", &[])),
            vec!["root@android-terminal"]
        );
        assert_eq!(texts(&run(&mut session, "uname", &[])), vec![SYSTEM_BANNER]);
        assert_eq!(
            texts(&run(&mut session, "echo", &["Olá", "Mundo"])),
            vec!["Olá Mundo"]
        );
    }

    #[test]
    fn test_mkdir_then_conflict() {
        let mut session = TerminalSession::new();
        assert_eq!(texts(&run(&mut session, "mkdir", &["notes"])), vec![""]);

        let before = session.fs().clone();
        let result = run(&mut session, "mkdir", &["notes"]);
        assert_eq!(
            texts(&result),
            vec!["mkdir: não foi possível criar diretório 'notes'"]
        );
        assert_eq!(session.fs(), &before);

        // Name taken by a file also conflicts
        assert!(run(&mut session, "mkdir", &["readme.txt"]).is_error());
        assert_eq!(
            texts(&run(&mut session, "mkdir", &[])),
            vec!["mkdir: faltando operando"]
        );
    }

    #[test]
    fn test_touch_then_cat() {
        let mut session = TerminalSession::new();
        assert_eq!(texts(&run(&mut session, "touch", &["a.txt"])), vec![""]);
        assert_eq!(texts(&run(&mut session, "cat", &["a.txt"])), vec!["", "", ""]);
        assert_eq!(
            texts(&run(&mut session, "touch", &["a.txt"])),
            vec!["touch: não foi possível criar arquivo 'a.txt'"]
        );
        assert_eq!(
            texts(&run(&mut session, "touch", &["documents"])),
            vec!["touch: não foi possível criar arquivo 'documents'"]
        );
        assert_eq!(
            texts(&run(&mut session, "touch", &[])),
            vec!["touch: faltando operando arquivo"]
        );
    }

    #[test]
    fn test_unknown_command() {
        let mut session = TerminalSession::new();
        let result = run(&mut session, "foo", &[]);
        assert_eq!(
            texts(&result),
            vec!["foo: comando não encontrado. Digite 'help' para ver comandos disponíveis."]
        );
        assert!(result.is_error());
    }

    #[test]
    fn test_format_date_weekday_is_long() {
        let monday = Utc.with_ymd_and_hms(2024, 1, 15, 9, 5, 9).unwrap();
        assert_eq!(
            format_date(&monday),
            "segunda-feira, 15 de janeiro de 2024 09:05:09"
        );

        let saturday = Utc.with_ymd_and_hms(2024, 1, 20, 14, 5, 9).unwrap();
        assert_eq!(format_date(&saturday), "sábado, 20 de janeiro de 2024 14:05:09");

        let sunday = Utc.with_ymd_and_hms(2024, 3, 3, 0, 0, 0).unwrap();
        assert_eq!(format_date(&sunday), "domingo, 3 de março de 2024 00:00:00");
    }

    #[test]
    fn test_date_is_single_line() {
        let mut session = TerminalSession::new();
        let result = run(&mut session, "date", &[]);
        assert_eq!(result.output.len(), 1);
        assert!(!result.is_error());
    }
}
