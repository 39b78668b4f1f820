// Players widget: every player from the last refresh, in backend order.
//
// Columns: Name, Pos, Team, Tier, ECR, ADP, Blend. Missing rankings are
// left blank. The highlighted row is the selected player id.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};
use ratatui::Frame;

use draftboard_core::player::Player;

use crate::tui::format::table_cells;
use crate::tui::ViewState;

const HEADERS: [&str; 7] = ["Name", "Pos", "Team", "Tier", "ECR", "ADP", "Blend"];

/// Render the players table into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let header = Row::new(HEADERS.iter().enumerate().map(|(i, h)| cell(i, h.to_string())))
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );

    let rows: Vec<Row> = state.players.iter().map(player_row).collect();

    let widths = [
        Constraint::Min(16),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(5),
        Constraint::Length(6),
        Constraint::Length(6),
    ];

    let title = format!("Players ({})", state.players.len());

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title))
        .row_highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol(">> ");

    let mut table_state = TableState::default().with_selected(state.selected_index());
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn player_row(player: &Player) -> Row<'static> {
    Row::new(
        table_cells(player)
            .into_iter()
            .enumerate()
            .map(|(i, text)| cell(i, text)),
    )
}

/// Name is left-aligned; the short code and number columns are centered.
fn cell(column: usize, text: String) -> Cell<'static> {
    if column == 0 {
        Cell::from(text)
    } else {
        Cell::from(Line::from(text).centered())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
