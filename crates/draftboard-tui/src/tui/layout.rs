// Screen layout: panel arrangement and sizing.
//
// +--------------------------------------------------------------+
// | Header: title, [r] Refresh, status (3 rows)                  |
// +---------------+------------------------------+---------------+
// | Your Roster   | Players (50%)                | Next Up (25%) |
// +---------------+                              |               |
// | On Deck (25%) |                              |               |
// +---------------+------------------------------+---------------+
// | Help Bar (1 row)                                             |
// +--------------------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each dashboard zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    pub header: Rect,
    /// Left column top: roster placeholder.
    pub roster: Rect,
    /// Left column bottom: top suggestions.
    pub on_deck: Rect,
    /// Center column: full player table.
    pub players: Rect,
    /// Right column: secondary suggestions.
    pub next_up: Rect,
    pub help_bar: Rect,
}

/// Height of the roster placeholder panel, borders included.
const ROSTER_HEIGHT: u16 = 4;

/// Build the dashboard layout from the available terminal area.
pub fn build_layout(area: Rect) -> AppLayout {
    // Vertical: header(3) | body(fill) | help(1)
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(6),    // three columns
            Constraint::Length(1), // help bar
        ])
        .split(area);

    let header = vertical[0];
    let body = vertical[1];
    let help_bar = vertical[2];

    // Horizontal: left (25%) | players (50%) | next up (25%)
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ])
        .split(body);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(ROSTER_HEIGHT), Constraint::Min(3)])
        .split(columns[0]);

    AppLayout {
        header,
        roster: left[0],
        on_deck: left[1],
        players: columns[1],
        next_up: columns[2],
        help_bar,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
