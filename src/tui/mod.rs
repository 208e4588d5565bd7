//! # Terminal User Interface Module
//!
//! Terminal presentation of the roster, built with Ratatui on a crossterm
//! backend.
//!
//! ## Key Components
//! - **Terminal Management**: raw mode, alternate screen and mouse capture,
//!   restored on exit even when the loop fails
//! - **Event Loop**: reads one input event at a time and redraws only when the
//!   app reports a change or the terminal was resized
//! - **Input Processing**: keyboard and mouse routing (`input`, `mouse`)
//! - **Widget Rendering**: form, list, modal and dialogs (`widgets`)

use crate::app::App;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, layout::Rect, Terminal};
use std::{io, time::Duration};
use tracing::{debug, info};

pub mod input;
pub mod layout;
pub mod mouse;
pub mod theme;
pub mod widgets;

/// Main entry point for the terminal user interface
///
/// Initializes the terminal, runs the event loop until the user quits, and
/// restores the terminal before returning the loop's result.
pub fn run(app: &mut App, tick_rate: Duration) -> Result<()> {
    let mut terminal = init_terminal().context("initialize terminal")?;
    info!("roster UI started");

    let result = run_loop(&mut terminal, app, tick_rate);
    let restored = restore_terminal(&mut terminal).context("restore terminal");

    info!(students = app.roster.len(), "roster UI stopped");
    result.and(restored)
}

/// Processes events until `app.should_quit`
pub fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<()> {
    while !app.should_quit {
        if app.take_dirty() {
            terminal.draw(|f| widgets::render(app, f)).context("draw frame")?;
        }

        if !event::poll(tick_rate).context("poll terminal events")? {
            continue;
        }
        match event::read().context("read terminal event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                input::handle_key_press(app, key);
            }
            Event::Mouse(mouse) => {
                let size = terminal.size().context("query terminal size")?;
                let screen = Rect::new(0, 0, size.width, size.height);
                input::handle_mouse_event(app, mouse.kind, mouse.column, mouse.row, screen);
            }
            Event::Resize(width, height) => {
                debug!(width, height, "terminal resized");
                app.mark_dirty();
            }
            _ => {}
        }
    }
    Ok(())
}

/// Initializes the terminal for raw mode operation
fn init_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        crossterm::cursor::Hide
    )?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Restores the terminal to normal operation mode
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        crossterm::cursor::Show
    )?;
    terminal.show_cursor()
}
