//! Terminal UI: a clickable board, a status line and a time-travel move list.

mod app;
mod input;
mod ui;

pub use app::{App, ClickTarget, Focus};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Write};
use tracing::{debug, error, info, instrument, warn};

use crate::settings::Settings;

/// Restores the terminal on drop: raw mode off, main screen, no mouse capture.
///
/// Created right after raw mode is enabled so every exit path, including a
/// failed setup step or a panic in the game loop, leaves the shell usable.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        info!("Restoring terminal");
        if let Err(err) = disable_raw_mode() {
            warn!(error = %err, "Failed to disable raw mode");
        }
        if let Err(err) = restore_screen(&mut io::stdout()) {
            warn!(error = %err, "Failed to restore screen");
        }
    }
}

/// Writes the commands that undo [`run_tui`]'s screen setup.
fn restore_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, DisableMouseCapture, cursor::Show)
}

/// Runs the interactive game until the user quits.
///
/// The terminal is restored before returning, also when setup or the loop fails.
#[instrument(skip(settings))]
pub fn run_tui(settings: &Settings) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let _guard = TerminalGuard;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let res = run_app(&mut terminal, App::new(settings));
    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draw, wait for one input event, apply it. Repeats until quit.
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if *app.should_quit() {
            return Ok(());
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = terminal.size()?;
                let layout = ui::layout(Rect::new(0, 0, size.width, size.height));
                if let Some(target) = ui::hit_test(&layout, &app, mouse.column, mouse.row) {
                    app.handle_click(target);
                }
            }
            other => debug!(event = ?other, "Unhandled terminal event"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_screen_leaves_alternate_screen() {
        let mut out = Vec::new();
        restore_screen(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        // Leave alternate screen, then show the cursor.
        assert!(text.contains("\x1b[?1049l"));
        assert!(text.contains("\x1b[?25h"));
    }
}
