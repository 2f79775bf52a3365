//! Terminal setup and the event loop.

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::config::TUI_TICK_MS;
use crate::dashboard::Dashboard;

use super::render::draw;
use super::session::Session;


type Term = Terminal<CrosstermBackend<io::Stdout>>;


/// Run the interactive dashboard until the user quits.
pub fn run(dashboard: &Dashboard) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event_loop(&mut terminal, dashboard);

    // Restore the terminal even when the loop failed.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}


fn event_loop(terminal: &mut Term, dashboard: &Dashboard) -> Result<()> {
    let mut session = Session::new(dashboard);
    tracing::debug!(view = session.nav().selected_view(), "interactive session started");

    loop {
        terminal.draw(|frame| draw(frame, dashboard, &session))?;

        if !event::poll(Duration::from_millis(TUI_TICK_MS))? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                session.handle_key(dashboard, key);
            }
        }

        if session.should_quit() {
            break;
        }
    }

    Ok(())
}
