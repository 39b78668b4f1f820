// TUI dashboard: view state, layout, input handling, and widget rendering.
//
// The TUI owns the `ViewState`. Workflow tasks push `UiUpdate` transitions
// over an mpsc channel; the TUI applies them in arrival order and re-renders
// on a fixed tick.

pub mod format;
pub mod input;
pub mod layout;
pub mod widgets;

use std::time::Duration;

use chrono::{DateTime, Local};
use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tokio::sync::mpsc;
use tracing::info;

use draftboard_core::player::{Player, SuggestionBundle};
use draftboard_core::protocol::{
    refresh_failed_message, UiUpdate, UserCommand, LOADING_PLAYERS_MESSAGE, READY_MESSAGE,
};

use layout::{build_layout, AppLayout};

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// Everything the renderer reads.
///
/// Starts empty and is only changed through `apply_ui_update` (workflow
/// transitions) and the input handler (table selection).
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Full player list from the last completed refresh, in backend order.
    pub players: Vec<Player>,
    /// Suggestion bundle from the last completed refresh.
    pub suggestions: Option<SuggestionBundle>,
    /// True while a refresh run is in flight.
    pub is_loading: bool,
    /// Shown verbatim in the header.
    pub status_message: String,
    /// When the current board was fetched.
    pub last_updated: Option<DateTime<Local>>,
    /// Id of the highlighted table row. Tracked by id so the highlight
    /// follows the player when a refresh reorders the list.
    pub selected_player: Option<String>,
}

impl ViewState {
    /// Table index of the selected player, if it is still on the board.
    pub fn selected_index(&self) -> Option<usize> {
        let id = self.selected_player.as_deref()?;
        self.players.iter().position(|p| p.id == id)
    }

    /// Move the selection by `delta` rows, clamped to the table.
    pub fn move_selection(&mut self, delta: isize) {
        if self.players.is_empty() {
            self.selected_player = None;
            return;
        }
        let last = self.players.len() - 1;
        let target = match self.selected_index() {
            Some(current) => {
                if delta.is_negative() {
                    current.saturating_sub(delta.unsigned_abs())
                } else {
                    current.saturating_add(delta.unsigned_abs()).min(last)
                }
            }
            None => 0,
        };
        self.select_index(target);
    }

    pub fn select_first(&mut self) {
        self.select_index(0);
    }

    pub fn select_last(&mut self) {
        self.select_index(self.players.len().saturating_sub(1));
    }

    fn select_index(&mut self, index: usize) {
        self.selected_player = self.players.get(index).map(|p| p.id.clone());
    }
}

// ---------------------------------------------------------------------------
// UiUpdate processing
// ---------------------------------------------------------------------------

/// Apply a single workflow transition to the view state.
pub fn apply_ui_update(state: &mut ViewState, update: UiUpdate) {
    match update {
        UiUpdate::RefreshStarted => {
            state.is_loading = true;
        }
        UiUpdate::Recomputed => {
            state.status_message = LOADING_PLAYERS_MESSAGE.to_string();
        }
        UiUpdate::BoardLoaded {
            players,
            suggestions,
            fetched_at,
        } => {
            state.players = players;
            state.suggestions = Some(suggestions);
            state.status_message = READY_MESSAGE.to_string();
            state.last_updated = Some(fetched_at);
            if state.selected_index().is_none() {
                state.selected_player = None;
            }
        }
        UiUpdate::RefreshFailed(error) => {
            state.status_message = refresh_failed_message(&error);
        }
        UiUpdate::RefreshFinished => {
            state.is_loading = false;
        }
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete dashboard frame.
pub fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area());

    widgets::header::render(frame, layout.header, state);
    widgets::roster::render(frame, layout.roster);
    widgets::suggestions::render(
        frame,
        layout.on_deck,
        "On Deck",
        state.suggestions.as_ref().map(|s| s.top.as_slice()),
    );
    widgets::players::render(frame, layout.players, state);
    widgets::suggestions::render(
        frame,
        layout.next_up,
        "Next Up",
        state.suggestions.as_ref().map(|s| s.next.as_slice()),
    );
    render_help_bar(frame, &layout);
}

fn render_help_bar(frame: &mut Frame, layout: &AppLayout) {
    let text = " r:Refresh | j/k:Move | PgUp/PgDn:Page | g/G:Top/Bottom | q:Quit";
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        text,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, layout.help_bar);
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop.
///
/// 1. Initializes the terminal (raw mode, alternate screen).
/// 2. Installs a panic hook that restores the terminal.
/// 3. Selects over UI updates, keyboard input, and render ticks.
/// 4. Restores the terminal on exit.
pub async fn run(
    mut ui_rx: mpsc::Receiver<UiUpdate>,
    cmd_tx: mpsc::Sender<UserCommand>,
    tick_rate: Duration,
) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let mut view_state = ViewState::default();
    let mut event_stream = EventStream::new();

    let mut render_tick = tokio::time::interval(tick_rate);
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let result = loop {
        tokio::select! {
            update = ui_rx.recv() => {
                match update {
                    Some(ui_update) => apply_ui_update(&mut view_state, ui_update),
                    None => {
                        info!("UI channel closed, leaving TUI");
                        break Ok(());
                    }
                }
            }

            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if let Some(cmd) = input::handle_key(key_event, &mut view_state) {
                            let _ = cmd_tx.send(cmd).await;
                            if cmd == UserCommand::Quit {
                                break Ok(());
                            }
                        }
                    }
                    Some(Ok(_)) => {
                        // Resize is picked up by the next draw; mouse is unused.
                    }
                    Some(Err(e)) => break Err(anyhow::Error::new(e).context("terminal input error")),
                    None => break Ok(()),
                }
            }

            _ = render_tick.tick() => {
                if let Err(e) = terminal.draw(|frame| render_frame(frame, &view_state)) {
                    break Err(anyhow::Error::new(e).context("failed to draw frame"));
                }
            }
        }
    };

    ratatui::restore();
    result
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
