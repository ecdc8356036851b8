//! Wanderlust TUI entry point: terminal setup, logging, event loop.

use std::fs::{self, File};
use std::io::{self, stdout};
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing_subscriber::EnvFilter;

use wanderlust_core::settings::Settings;
use wanderlust_tui::app::{AppState, Overlay};
use wanderlust_tui::{input, ui};

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let config_path = Settings::default_path();
    if let Some(path) = &config_path {
        start_logging(path);
    }

    let settings = match &config_path {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };
    let catalog = settings.load_catalog().context("loading catalog")?;
    tracing::info!(
        destinations = catalog.destinations.len(),
        accommodations = catalog.accommodations.len(),
        "catalog loaded"
    );

    let mut app = AppState::new(catalog, settings);
    app.overlay = Overlay::Welcome;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Log to a file next to the config; stdout belongs to the terminal UI.
/// Level comes from `RUST_LOG`, default `info`.
/// Logging is optional: an unwritable log location only costs the log.
fn start_logging(config_path: &Path) -> bool {
    match init_logging(config_path) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("warning: logging disabled: {e:#}");
            false
        }
    }
}

fn init_logging(config_path: &Path) -> Result<()> {
    let Some(dir) = config_path.parent() else {
        return Ok(());
    };
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let log_path = dir.join("wanderlust.log");
    let file = File::create(&log_path)
        .with_context(|| format!("creating log file {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 3. Check quit
        if !app.running {
            tracing::info!(route = %app.route, "quitting");
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwritable_log_dir_does_not_abort() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the config directory should be.
        let blocker = dir.path().join("wanderlust");
        fs::write(&blocker, "not a directory").unwrap();
        let config = blocker.join("nested").join("config.toml");

        assert!(init_logging(&config).is_err());
        assert!(!start_logging(&config));
    }
}
