mod app;
mod config;
mod domain;
mod input;
mod logging;
mod ticker;
mod ui;

use app::AppState;
use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "taskmates")]
#[command(about = "Organize tasks with ease: a terminal to-do list with progress stats", long_about = None)]
struct Cli {
    /// Pre-fill the sign-in name field
    #[arg(short, long)]
    name: Option<String>,
    /// Config file path. Defaults to ~/.taskmates/config.json
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Log file path. Defaults to ~/.taskmates/taskmates.log
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = match cli.log_file {
        Some(path) => path,
        None => config::log_path()?,
    };
    logging::init(&log_file, cli.verbose)?;

    let config_path = match cli.config {
        Some(path) => path,
        None => config::config_path()?,
    };
    let config = config::load(&config_path)?;
    info!(config = %config_path.display(), ?config, "starting taskmates");

    let mut app = AppState::new(config);
    if let Some(name) = cli.name {
        app.name_input = name;
    }

    run_tui(&mut app)
}

fn run_tui(app: &mut AppState) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        error!(error = %err, "exited with error");
    } else {
        info!("exited");
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration(app.config.tick_rate_ms);

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle one event at a time, in arrival order
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }
    }
}
