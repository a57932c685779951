use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::state::{model::SessionView, session::SessionState};
use crate::ui;

const TICK: Duration = Duration::from_millis(50);

struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Runs the TUI until the user quits, then hands back the last view.
///
/// The view stays on screen after training finishes so the final line and
/// cost curve can be inspected; `q` or Esc leaves, `l` toggles the event log.
///
/// # Errors
/// Returns an error if terminal setup or rendering fails.
pub fn run(mut state: SessionState) -> Result<SessionView> {
    let _guard = TerminalGuard::enter()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut show_logs = true;

    loop {
        state.tick();
        let view = state.view();
        terminal.draw(|f| ui::draw::draw(f, &view, show_logs))?;

        if event::poll(TICK)? {
            if let Event::Key(k) = event::read()? {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                match k.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('l') => show_logs = !show_logs,
                    _ => {}
                }
            }
        }
    }

    terminal.show_cursor()?;
    Ok(state.view())
}
