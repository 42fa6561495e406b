//! Session configuration.
//!
//! Centralizes the fixed strings and seed content of a session.
//! Text assets are loaded at compile time using `include_str!`.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Welcome banner shown when a session starts.
pub const WELCOME_BANNER: &str = include_str!("../assets/text/banner.txt");

/// Usage text for the `help` command.
pub const HELP_TEXT: &str = include_str!("../assets/text/help.txt");

// =============================================================================
// Identity
// =============================================================================

/// Output of `whoami`.
pub const IDENTITY: &str = "root@android-terminal";

/// Output of `uname`.
pub const SYSTEM_BANNER: &str = "Android Terminal v1.0 - Rust Runtime";

/// User shown in the prompt.
pub const PROMPT_USER: &str = "root";

/// Host shown in the prompt.
pub const PROMPT_HOST: &str = "android";

/// Static label on the left of the status line.
pub const STATUS_LABEL: &str = "Rust Runtime";

// =============================================================================
// Namespace
// =============================================================================

/// Name of the single top-level directory every path starts from.
pub const HOME_DIR: &str = "home";

/// Seed files and directories, as `(path below home, content)`.
///
/// `None` content marks a directory. Parents must come before children.
pub const SEED_ENTRIES: &[(&str, Option<&str>)] = &[
    (
        "readme.txt",
        Some("Bem-vindo ao Terminal Android!\nUse \"help\" para ver comandos disponíveis."),
    ),
    ("projects", None),
    (
        "projects/app.js",
        Some("console.log(\"Hello from Android Terminal!\");"),
    ),
    ("documents", None),
];

// =============================================================================
// Formatting
// =============================================================================

/// `date` output pattern after the weekday, rendered with the pt-BR locale.
pub const DATE_FORMAT: &str = "%-d de %B de %Y %H:%M:%S";

/// Long pt-BR weekday names, starting on Sunday.
///
/// chrono's pt_BR `%A` only has the short Monday to Friday forms.
pub const WEEKDAYS: [&str; 7] = [
    "domingo",
    "segunda-feira",
    "terça-feira",
    "quarta-feira",
    "quinta-feira",
    "sexta-feira",
    "sábado",
];
