//! Terminal frontend: one board, one status line, one leaderboard panel.

mod app;
mod input;
mod ui;

pub use app::App;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::db::LeaderboardStore;

/// Runs the game over an opened leaderboard store until the player quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be prepared or the initial
/// standings cannot be read.
pub fn run(store: LeaderboardStore) -> Result<()> {
    let mut app = App::new(store)?;

    info!("Starting terminal frontend");
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Enter | KeyCode::Char(' ') => app.place_at_cursor(),
                    code => {
                        let next = input::move_cursor(app.cursor(), code);
                        app.set_cursor(next);
                    }
                }
            }
        }
    }
}
