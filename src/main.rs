// Entry point: terminal setup, config resolution, client construction, run loop.

mod app;
mod config;
mod error;
mod service;
mod state;
mod ui;

use std::io;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use app::App;
use config::Config;
use service::ResearchClient;

#[tokio::main]
async fn main() -> io::Result<()> {
    let config = Config::from_env();
    let client = match ResearchClient::new(&config) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("failed to initialize research client: {err}");
            std::process::exit(1);
        }
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(client);
    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
