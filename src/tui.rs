//! Terminal setup and teardown

use color_eyre::Result;
use crossterm::{
    cursor,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::{stdout, Stdout};
use std::panic;

/// A type alias for the terminal backend
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Put the terminal into raw mode on the alternate screen
pub fn init() -> Result<Tui> {
    install_panic_hook();

    terminal::enable_raw_mode()?;
    crossterm::execute!(stdout(), EnterAlternateScreen, cursor::Hide)?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore() -> Result<()> {
    terminal::disable_raw_mode()?;
    crossterm::execute!(stdout(), LeaveAlternateScreen, cursor::Show)?;
    Ok(())
}

/// Leave the alternate screen before the panic message is printed
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        original_hook(panic_info);
    }));
}
