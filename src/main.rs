//! Envsafe CLI - View environmental safety profiles for any location
//!
//! A terminal UI application that displays a synthesized environmental
//! safety profile (air pollution, water quality, deforestation, gas plumes,
//! history, and predictions) for watchlist cities, ad-hoc coordinates, or
//! geocoded search results.

mod app;
mod cache;
mod cli;
mod data;
mod profile;
mod ui;

use std::io;
use std::panic;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use app::{App, AppState};
use cli::{Cli, StartupConfig, Target};
use data::{fallback_name, watchlist, GeocodeClient, Location};
use profile::synthesize;

/// Sets up a panic hook that restores the terminal before printing the panic
/// message. This ensures the terminal is usable even if the application
/// panics.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore the terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        // Call the original panic hook
        original_hook(panic_info);
    }));
}

/// Renders the UI based on the current application state
fn render_ui(frame: &mut ratatui::Frame, app: &App) {
    match &app.state {
        AppState::LocationList => {
            ui::render_location_list(frame, app);
        }
        AppState::ProfileDetail(location_id) => {
            ui::render_profile_detail(frame, app, location_id);
        }
    }

    if app.show_help {
        ui::render_help_overlay(frame);
    }
}

/// One-shot mode: print the profile for the target as JSON and exit
async fn run_json(target: &Target) -> Result<(), Box<dyn std::error::Error>> {
    let profile = match target {
        Target::Coordinate { lat, lng, name } => {
            let name = name.clone().unwrap_or_else(|| fallback_name(*lat, *lng));
            synthesize(*lat, *lng, name)?
        }
        Target::Search(query) => {
            let results = GeocodeClient::new().search(query).await?;
            let top = results
                .into_iter()
                .next()
                .ok_or_else(|| format!("No places found for '{}'", query))?;
            synthesize(top.lat, top.lng, top.name)?
        }
    };

    println!("{}", serde_json::to_string_pretty(&profile)?);
    Ok(())
}

/// Resolves the startup target into the location list and an optional
/// location ID to open directly in the detail view
async fn resolve_locations(
    target: &Option<Target>,
) -> Result<(Vec<Location>, Option<String>), Box<dyn std::error::Error>> {
    match target {
        None => Ok((watchlist(), None)),
        Some(Target::Coordinate { lat, lng, name }) => {
            let name = name.clone().unwrap_or_else(|| fallback_name(*lat, *lng));
            let location = Location::new("custom", name, *lat, *lng);
            Ok((vec![location], Some("custom".to_string())))
        }
        Some(Target::Search(query)) => {
            let results = GeocodeClient::new().search(query).await?;
            if results.is_empty() {
                return Err(format!("No places found for '{}'", query).into());
            }
            let locations = results
                .into_iter()
                .enumerate()
                .map(|(i, r)| Location::new(format!("result-{}", i), r.name, r.lat, r.lng))
                .collect();
            Ok((locations, None))
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = match StartupConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    // One-shot JSON mode skips the TUI entirely
    if config.json_output {
        if let Some(ref target) = config.target {
            return run_json(target).await;
        }
        // Unreachable: from_cli rejects --json without a target
        return Ok(());
    }

    // Resolve the location list before touching the terminal so failures
    // print normally
    let (locations, focus_id) = resolve_locations(&config.target).await?;

    // Set up panic hook to restore terminal on crash
    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app instance
    let mut app = App::with_locations(locations);
    if let Some(ref id) = focus_id {
        app.focus(id);
    }

    // Main event loop
    loop {
        // Render UI
        terminal.draw(|f| render_ui(f, &app))?;

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}
