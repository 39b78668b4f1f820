// Keyboard input handling and command dispatch.
//
// Translates crossterm key events into `UserCommand`s for the app loop, or
// into local `ViewState` changes (table selection).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use draftboard_core::protocol::UserCommand;

use super::ViewState;

/// Rows moved by PageUp / PageDown.
pub const PAGE_SIZE: isize = 10;

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the key should reach the app loop.
/// The refresh key is ignored while a refresh is in flight.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // crossterm reports releases on some platforms; act on presses only.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    match key_event.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(UserCommand::Quit),

        KeyCode::Char('r') => {
            if view_state.is_loading {
                None
            } else {
                Some(UserCommand::Refresh)
            }
        }

        KeyCode::Down | KeyCode::Char('j') => {
            view_state.move_selection(1);
            None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            view_state.move_selection(-1);
            None
        }
        KeyCode::PageDown => {
            view_state.move_selection(PAGE_SIZE);
            None
        }
        KeyCode::PageUp => {
            view_state.move_selection(-PAGE_SIZE);
            None
        }
        KeyCode::Home | KeyCode::Char('g') => {
            view_state.select_first();
            None
        }
        KeyCode::End | KeyCode::Char('G') => {
            view_state.select_last();
            None
        }

        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
