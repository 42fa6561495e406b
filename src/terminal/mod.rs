//! Terminal renderers.
//!
//! - [`run_interactive`] drives a [`TerminalApp`] from raw key events
//! - [`run_batch`] feeds whole lines (from `-c` or a pipe) to a session

mod input;
mod output;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use crossterm::cursor::{MoveTo, RestorePosition, SavePosition};
use crossterm::event::{self, Event};
use crossterm::style::{Print, Stylize};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{execute, queue};
use droidterm_core::{CommandResult, TerminalSession};
use log::{debug, info};

use crate::app::{AppEvent, TerminalApp};
use crate::config::RESERVED_ROWS;

use input::map_key;
use output::{status_line, styled};

/// Run the interactive key loop until the user quits.
pub fn run_interactive(app: &mut TerminalApp) -> Result<()> {
    let mut stdout = io::stdout();
    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    info!("interactive session started");

    let result = event_loop(app, &mut stdout);

    // Restore the terminal even if the loop failed
    terminal::disable_raw_mode().context("failed to disable raw mode")?;
    execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
    info!(
        "interactive session ended after {} commands",
        app.session().history().len()
    );
    result
}

fn event_loop(app: &mut TerminalApp, out: &mut impl Write) -> Result<()> {
    draw(app, out)?;
    loop {
        match event::read().context("failed to read terminal event")? {
            Event::Key(key) => {
                let Some(action) = map_key(key) else {
                    continue;
                };
                match app.handle(action) {
                    AppEvent::Redraw => draw(app, out)?,
                    AppEvent::Ignored => {}
                    AppEvent::Quit => return Ok(()),
                }
            }
            Event::Resize(cols, rows) => {
                debug!("resized to {}x{}", cols, rows);
                draw(app, out)?;
            }
            _ => {}
        }
    }
}

/// Redraw the whole screen: newest scrollback lines, input line, status line.
///
/// Scrollback lines are cut to the terminal width so each takes one row.
fn draw(app: &TerminalApp, out: &mut impl Write) -> Result<()> {
    let (cols, rows) = terminal::size().context("failed to query terminal size")?;
    let visible = rows.saturating_sub(RESERVED_ROWS) as usize;
    let skip = app.scrollback().len().saturating_sub(visible);

    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    for line in app.scrollback().iter().skip(skip) {
        queue!(out, Print(styled(line, cols as usize)), Print("\r\n"))?;
    }

    let prompt = app.session().prompt();
    queue!(
        out,
        Print(prompt.as_str().green().bold()),
        Print(" "),
        Print(app.input()),
        SavePosition,
        MoveTo(0, rows.saturating_sub(1)),
        Print(status_line(app.session(), cols as usize).reverse()),
        RestorePosition,
    )?;
    out.flush()?;
    Ok(())
}

/// Run each line in one session, printing results as they come.
pub fn run_batch<I>(lines: I, json: bool, out: &mut impl Write) -> Result<TerminalSession>
where
    I: IntoIterator<Item = String>,
{
    let mut session = TerminalSession::new();
    for line in lines {
        let result = session.execute(&line);
        write_result(&result, json, out)?;
    }
    out.flush()?;
    Ok(session)
}

/// Lines from a reader, stopping at the first read error.
pub fn read_lines(reader: impl BufRead) -> impl Iterator<Item = String> {
    reader.lines().map_while(|line| match line {
        Ok(line) => Some(line),
        Err(err) => {
            log::warn!("stopped reading input: {}", err);
            None
        }
    })
}

fn write_result(result: &CommandResult, json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *out, result).context("failed to encode result")?;
        writeln!(out)?;
        return Ok(());
    }
    // A plain stream has nothing to clear.
    for line in &result.output {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
