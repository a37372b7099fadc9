//! lanwarden - VPN bypass investigation from the terminal.
//!
//! Probes locally-scoped endpoints while a VPN is active, classifies
//! whether local traffic is leaking past the tunnel, and records the
//! outcome in a bounded audit log. Runs as a live TUI dashboard or as
//! one-shot CLI commands.

mod app;
mod audit;
mod cli;
mod client;
mod config;
mod constants;
mod core;
mod event;
mod gate;
mod policy;
mod state;
mod theme;
mod ui;
mod utils;
mod vpn;

use app::App;
use audit::AuditLog;
use clap::Parser;
use cli::args::{Args, Commands};
use cli::commands;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use config::Config;
use crate::core::worker;
use crossterm::event::KeyEventKind;
use event::{Event, EventHandler};
use std::path::PathBuf;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let config_path = utils::config_path()
        .unwrap_or_else(|_| PathBuf::from(constants::CONFIG_FILE_NAME));
    let (config, config_source) = Config::load(&config_path);

    match args.command {
        Some(Commands::Investigate { json, target }) => {
            commands::run_investigate(&config, json, &target).map_err(|e| eyre!(e))?;
        }
        Some(Commands::Request {
            url,
            method,
            body,
            bypass,
            emergency,
        }) => {
            commands::run_request(
                &url,
                &method,
                body.as_deref(),
                bypass,
                emergency.as_deref(),
            )
            .map_err(|e| eyre!(e))?;
        }
        Some(Commands::Report) => commands::run_report(&config, &config_source),
        Some(Commands::Audit { limit }) => commands::run_audit(limit),
        None => run_tui(config, config_source)?,
    }

    Ok(())
}

/// Run the watch dashboard until quit, then persist the audit log.
fn run_tui(config: Config, config_source: String) -> Result<()> {
    let audit = utils::audit_path()
        .map(|path| AuditLog::load(&path))
        .unwrap_or_default();
    let updates = worker::spawn_watch_worker(config.clone(), audit.clone());
    let mut app = App::new(config, config_source, audit, updates);

    let mut terminal = ratatui::init();
    let events = EventHandler::new(constants::DEFAULT_TICK_RATE);
    let result = run_loop(&mut terminal, &mut app, &events);
    ratatui::restore();

    if let Ok(path) = utils::audit_path() {
        let _ = app.audit.save(&path);
    }

    result
}

fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, app))?;

        match events.next()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.on_key(key),
            Event::Key(_) | Event::Resize(_, _) => {}
            Event::Tick => app.on_tick(),
        }
    }
    Ok(())
}
