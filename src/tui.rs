use std::io;

use crossterm::{
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use ratatui::{DefaultTerminal, Terminal, prelude::CrosstermBackend};

use anyhow::{Context, Result};

/// Initializes the terminal in raw mode and alternate screen.
///
/// Returns a [`DefaultTerminal`] that must later be passed to [`restore`].
pub fn init() -> Result<DefaultTerminal> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restores the terminal to its normal mode and leaves the alternate screen.
pub fn restore(mut terminal: DefaultTerminal) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Runs `f` on an initialized terminal, restoring it before returning
/// whatever `f` produced.
pub fn with_terminal<F>(f: F) -> Result<()>
where
    F: FnOnce(&mut DefaultTerminal) -> Result<()>,
{
    let mut terminal = init()?;
    let result = f(&mut terminal);
    first_error(result, restore(terminal))
}

/// Keeps the error of the run over the one from restoring the terminal.
fn first_error(result: Result<()>, restored: Result<()>) -> Result<()> {
    match (result, restored) {
        (Err(err), Err(restore_err)) => {
            Err(err.context(format!("Also failed to restore terminal: {restore_err:#}")))
        }
        (Err(err), Ok(())) => Err(err),
        (Ok(()), restored) => restored,
    }
}
