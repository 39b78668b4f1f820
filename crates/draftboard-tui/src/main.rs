// Draftboard entry point.
//
// Startup sequence:
// 1. Load config
// 2. Initialize tracing (log to file, not terminal)
// 3. Build the backend client
// 4. Create mpsc channels
// 5. Spawn the app loop (runs the bootstrap check)
// 6. Run the TUI until the user quits
// 7. Cleanup on exit

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::sync::mpsc;
use tracing::{error, info};

use draftboard_core::api::{DraftApi, HttpDraftApi};
use draftboard_tui::app;
use draftboard_tui::config::{self, LoggingConfig};
use draftboard_tui::tui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load config
    let config = config::load_config().context("failed to load configuration")?;

    // 2. Initialize tracing
    init_tracing(&config.logging)?;
    info!("Draftboard starting up");
    info!(
        "Config loaded: backend={}, timeout={}s",
        config.backend.base_url, config.backend.timeout_secs
    );

    // 3. Backend client
    let api: Arc<dyn DraftApi> = Arc::new(
        HttpDraftApi::new(&config.backend.base_url, config.backend.timeout())
            .context("failed to build backend client")?,
    );

    // 4. Channels
    let (cmd_tx, cmd_rx) = mpsc::channel(64);
    let (ui_tx, ui_rx) = mpsc::channel(256);

    // 5. App loop
    let app_handle = tokio::spawn(async move {
        if let Err(e) = app::run(api, cmd_rx, ui_tx).await {
            error!("Application loop error: {}", e);
        }
    });

    // 6. TUI (blocks until 'q' or Ctrl+C)
    if let Err(e) = tui::run(ui_rx, cmd_tx, config.ui.tick_rate()).await {
        error!("TUI error: {:#}", e);
    }

    // 7. Cleanup: the TUI dropped cmd_tx, so the app loop winds down on its own.
    let _ = tokio::time::timeout(Duration::from_secs(5), app_handle).await;

    info!("Draftboard shut down cleanly");
    Ok(())
}

/// Initialize tracing to log to a file (the terminal belongs to the TUI).
fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join(&logging.directory);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let log_file = std::fs::File::create(log_dir.join(&logging.file_name))
        .context("failed to create log file")?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter)),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
