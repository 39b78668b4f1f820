// Messages passed between the workflow tasks, the app loop, and the TUI.

use chrono::{DateTime, Local};

use crate::player::{Player, SuggestionBundle};

/// Status line shown once the backend acknowledged a recompute.
pub const LOADING_PLAYERS_MESSAGE: &str = "Data refreshed. Now loading players...";

/// Status line shown after a complete refresh.
pub const READY_MESSAGE: &str = "Ready.";

/// The single user-visible failure message.
pub fn refresh_failed_message(error: &str) -> String {
    format!("Refresh failed: {error}")
}

/// State transitions emitted by the refresh workflow, in order.
///
/// The TUI applies these to its view state; nothing else mutates it.
#[derive(Debug, Clone, PartialEq)]
pub enum UiUpdate {
    /// A refresh run began.
    RefreshStarted,
    /// The backend acknowledged the recompute request.
    Recomputed,
    /// Players and suggestions were both fetched.
    BoardLoaded {
        players: Vec<Player>,
        suggestions: SuggestionBundle,
        fetched_at: DateTime<Local>,
    },
    /// A step failed; carries the underlying error text.
    RefreshFailed(String),
    /// The run ended, successfully or not.
    RefreshFinished,
}

/// Commands sent from the TUI to the app loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserCommand {
    Refresh,
    Quit,
}
