mod app;
mod config;
mod terminal;
mod utils;

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use app::TerminalApp;

/// droidterm - a simulated Android-style shell over an in-memory filesystem
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Run this command line (repeatable) in one session, then exit
    #[arg(short = 'c', long = "command")]
    commands: Vec<String>,

    /// Print each command result as a JSON object per line
    #[arg(long)]
    json: bool,

    /// Skip the welcome banner in interactive mode
    #[arg(long)]
    no_banner: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so they never mix with command output.
    env_logger::Builder::new()
        .filter_level(if args.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    let mut stdout = io::stdout().lock();

    if !args.commands.is_empty() {
        terminal::run_batch(args.commands, args.json, &mut stdout)?;
        return Ok(());
    }

    let interactive = io::stdin().is_terminal() && io::stdout().is_terminal() && !args.json;
    if interactive {
        drop(stdout);
        let mut app = TerminalApp::new(!args.no_banner);
        terminal::run_interactive(&mut app)
    } else {
        let lines = terminal::read_lines(io::stdin().lock());
        terminal::run_batch(lines, args.json, &mut stdout)?;
        Ok(())
    }
}
