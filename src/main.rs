//! Bazaar Finder - Entry Point
//!
//! Loads settings and catalogs, initializes the terminal, and runs the
//! viewer loop.

mod cli;

use std::io;
use std::fs::OpenOptions;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};

use bazaar_finder::data::{export_default_data, CatalogData};
use bazaar_finder::settings::{read_settings, resolve_settings, save_settings_to, settings_path, FinderSettings};
use bazaar_finder::ui::App;

/// How long to wait for input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    let settings_file = settings_path();

    // Read settings before logging starts; any failure is reported below
    let read = read_settings(&settings_file);
    let first_run = matches!(read, Ok(None));
    let log_level = read
        .as_ref()
        .ok()
        .and_then(Option::as_ref)
        .map_or_else(|| FinderSettings::default().log_level, |s| s.log_level.clone());

    // Initialize logging to file (to avoid interfering with TUI)
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("bazaar-finder.log")
        .context("Failed to open bazaar-finder.log")?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level.as_str())
    )
    .target(env_logger::Target::Pipe(Box::new(log_file)))
    .init();

    log::info!("Starting Bazaar Finder v{}", env!("CARGO_PKG_VERSION"));

    let mut settings = resolve_settings(&settings_file, read);
    if first_run {
        if let Err(e) = save_settings_to(&settings, &settings_file) {
            log::warn!("Could not write default settings: {}", e);
        }
    }

    if let Some(dir) = cli.data_dir {
        settings.data_dir = dir;
    }
    if let Some(mode) = cli.mode {
        settings.start_mode = mode.into();
    }

    if cli.export_data {
        export_default_data(&settings.data_dir)?;
        println!("Exported built-in catalogs to {}", settings.data_dir.display());
        return Ok(());
    }

    let catalog = CatalogData::load_from_dir(&settings.data_dir).into_catalog();
    log::info!(
        "Catalog ready: {} recipes, {} windmill goods",
        catalog.recipes().len(),
        catalog.goods().len()
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&catalog, settings.start_mode);
    let result = run_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Report any errors
    if let Err(ref e) = result {
        log::error!("Viewer exited with error: {}", e);
        eprintln!("Error: {}", e);
    }

    log::info!("Bazaar Finder shut down cleanly");
    result
}

/// Main viewer loop: redraw, then apply one key press
fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App<'_>) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events, not releases
                if key.kind == KeyEventKind::Press {
                    match app.handle_input(key) {
                        Ok(true) => break,
                        Ok(false) => {}
                        Err(e) => log::warn!("Input handling error: {}", e),
                    }
                }
            }
        }
    }

    Ok(())
}
