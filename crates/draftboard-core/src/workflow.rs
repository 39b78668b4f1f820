// Bootstrap check and refresh workflow.
//
// Both run as plain async functions against a `DraftApi` and report
// progress as `UiUpdate` messages. They never hold view state themselves,
// and there is no internal lock: the UI disables its refresh trigger while
// a run is in flight.

use chrono::Local;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::api::{ApiError, DraftApi};
use crate::protocol::UiUpdate;

/// Probe the backend once and run a refresh if it reports ready.
///
/// Returns whether a refresh ran. A failed probe is only logged.
pub async fn bootstrap(api: &dyn DraftApi, ui_tx: &mpsc::Sender<UiUpdate>) -> bool {
    match api.status().await {
        Ok(()) => {
            info!("Backend ready, running initial refresh");
            refresh(api, ui_tx).await;
            true
        }
        Err(e) => {
            debug!("Backend not ready, skipping initial refresh: {e}");
            false
        }
    }
}

/// Run one refresh: recompute, then fetch players and suggestions.
///
/// Always emits `RefreshStarted` first and `RefreshFinished` last. Players
/// and suggestions are emitted together in a single `BoardLoaded`, so a
/// failure part-way through leaves the previous board untouched.
pub async fn refresh(api: &dyn DraftApi, ui_tx: &mpsc::Sender<UiUpdate>) {
    info!("Refresh started");
    emit(ui_tx, UiUpdate::RefreshStarted).await;

    match run_steps(api, ui_tx).await {
        Ok(player_count) => info!(player_count, "Refresh complete"),
        Err(e) => {
            warn!("Refresh failed: {e}");
            emit(ui_tx, UiUpdate::RefreshFailed(e.to_string())).await;
        }
    }

    emit(ui_tx, UiUpdate::RefreshFinished).await;
}

async fn run_steps(api: &dyn DraftApi, ui_tx: &mpsc::Sender<UiUpdate>) -> Result<usize, ApiError> {
    api.refresh().await?;
    emit(ui_tx, UiUpdate::Recomputed).await;

    let players = api.players().await?;
    debug!(count = players.len(), "Fetched players");
    let suggestions = api.suggestions().await?;
    debug!(
        top = suggestions.top.len(),
        next = suggestions.next.len(),
        "Fetched suggestions"
    );

    let player_count = players.len();
    emit(
        ui_tx,
        UiUpdate::BoardLoaded {
            players,
            suggestions,
            fetched_at: Local::now(),
        },
    )
    .await;
    Ok(player_count)
}

async fn emit(ui_tx: &mpsc::Sender<UiUpdate>, update: UiUpdate) {
    // A closed channel means the UI is gone; nothing left to report to.
    let _ = ui_tx.send(update).await;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
