// Roster panel: placeholder until the backend exposes live roster data.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub const PLACEHOLDER_TEXT: &str = "Coming soon: live roster tiles & needs";

/// Render the roster placeholder into the given area.
pub fn render(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(PLACEHOLDER_TEXT)
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Your Roster"));
    frame.render_widget(paragraph, area);
}
