//! Terminal setup and teardown.

use std::io::{self, Stdout, stdout};

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        cursor::{Hide, Show},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};

/// Terminal type the app draws to.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Switches to raw mode on the alternate screen.
///
/// Installs a panic hook that restores the terminal first, so panic
/// messages stay readable.
///
/// # Errors
/// Returns an error if the terminal cannot be configured.
pub fn init() -> io::Result<Tui> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, Hide)?;

    install_panic_hook();

    Terminal::new(CrosstermBackend::new(stdout()))
}

/// Leaves the alternate screen and raw mode.
///
/// # Errors
/// Returns an error if the terminal cannot be reset.
pub fn restore() -> io::Result<()> {
    execute!(stdout(), Show, LeaveAlternateScreen)?;
    disable_raw_mode()
}

fn install_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        hook(panic_info);
    }));
}
