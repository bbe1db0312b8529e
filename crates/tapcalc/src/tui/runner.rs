//! Interactive terminal loop
//!
//! Sets the terminal up, pumps crossterm events into the app and always
//! restores the terminal, including when the loop fails.

use std::io::{self, Write};

use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use tracing::{debug, info, warn};

use super::app::CalculatorApp;
use super::input::InputHandler;
use super::ui::{keypad_area, render};
use crate::error::CalcResult;

/// Options for the interactive session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TuiOptions {
    /// Capture mouse clicks on the keypad
    pub mouse: bool,
}

impl Default for TuiOptions {
    fn default() -> Self {
        Self { mouse: true }
    }
}

/// Runs the calculator until the user quits
pub fn run(options: TuiOptions) -> CalcResult<()> {
    enable_raw_mode()?;
    let _guard = TerminalGuard {
        mouse: options.mouse,
    };

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if options.mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    info!(mouse = options.mouse, "terminal session started");

    let result = run_app(&mut terminal);
    info!("terminal session ended");
    result
}

/// Restores the terminal when dropped, on success and error paths alike
#[derive(Debug)]
struct TerminalGuard {
    mouse: bool,
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = restore_terminal(&mut io::stdout(), self.mouse) {
            warn!(error = %e, "terminal restore incomplete");
        }
    }
}

/// Undoes every setup step, continuing past failures
///
/// Returns the first error seen.
fn restore_terminal<W: Write>(out: &mut W, mouse: bool) -> io::Result<()> {
    let mut results = vec![disable_raw_mode()];
    if mouse {
        results.push(execute!(out, DisableMouseCapture));
    }
    results.push(execute!(out, LeaveAlternateScreen));
    results.push(execute!(out, Show));
    results.into_iter().collect()
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>) -> CalcResult<()> {
    let mut app = CalculatorApp::new();
    let handler = InputHandler::new();

    while !app.should_quit() {
        terminal.draw(|frame| render(&app, frame))?;

        match event::read()? {
            Event::Key(key) => {
                app.handle_action(handler.handle_key(key));
            }
            Event::Mouse(mouse) => {
                if let Some((x, y)) = handler.handle_mouse(mouse) {
                    let size = terminal.size()?;
                    let area = Rect::new(0, 0, size.width, size.height);
                    if !app.click(keypad_area(area), x, y) {
                        app.release();
                    }
                }
            }
            Event::Resize(width, height) => debug!(width, height, "terminal resized"),
            _ => {}
        }
    }

    Ok(())
}
