// playonme: terminal tennis coach.
// Sets up config, logging, and the terminal, then runs the event loop.

mod analysis;
mod app;
mod catalog;
mod config;
mod error;
mod logging;
mod media;
mod state;
mod ui;

use std::io::{self, stdout};
use std::sync::Arc;

use crossterm::event::{
    DisableBracketedPaste, DisableFocusChange, EnableBracketedPaste, EnableFocusChange,
};
use crossterm::execute;
use tracing::{info, warn};

use crate::analysis::SimulatedBackend;
use crate::app::App;
use crate::config::AppConfig;
use crate::state::Notice;

#[tokio::main]
async fn main() -> io::Result<()> {
    let (config, config_problems) = match AppConfig::load() {
        Ok(loaded) => loaded,
        Err(e) => (AppConfig::default(), vec![e]),
    };

    // Logging is best effort; the app still runs without a log file
    let _log_guard = config
        .resolved_log_dir()
        .and_then(|dir| logging::init(&dir, &config.log_level).ok());

    for e in &config_problems {
        warn!(error = %e, "ignoring config setting");
    }

    let backend = SimulatedBackend::new(config.analysis_delay());
    info!(
        delay_ms = backend.delay().as_millis() as u64,
        model = config.default_model.id(),
        plan = config.current_plan.id(),
        "starting playonme"
    );

    let mut app = App::new(&config, Arc::new(backend));
    for e in config_problems {
        app.notices.push(Notice::warn(e.to_string()));
    }

    let mut terminal = ratatui::init();
    execute!(stdout(), EnableBracketedPaste, EnableFocusChange)?;

    let result = app.run(&mut terminal);

    execute!(stdout(), DisableBracketedPaste, DisableFocusChange)?;
    ratatui::restore();

    info!("playonme exited");
    result
}
