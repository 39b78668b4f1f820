// Header widget: title, refresh control, status message, last update time.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::ViewState;

pub const TITLE: &str = "Draft Assistant";

/// Render the header into the given area.
///
/// Layout: [title] [refresh control] [status message] [updated time]
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut spans = vec![
        Span::styled(
            format!(" {TITLE} "),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        refresh_control(state.is_loading),
        Span::raw("  "),
        Span::styled(state.status_message.clone(), status_style(&state.status_message)),
    ];

    if let Some(updated) = state.last_updated {
        spans.push(Span::styled(
            format!("  (updated {})", updated.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

/// The `[r] Refresh` control; greyed out while a refresh is running.
pub fn refresh_control(is_loading: bool) -> Span<'static> {
    if is_loading {
        Span::styled(
            "[r] Refreshing...",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        )
    } else {
        Span::styled(
            "[r] Refresh",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    }
}

fn status_style(message: &str) -> Style {
    if message.starts_with("Refresh failed") {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Gray)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::test_support::buffer_lines;
    use chrono::{Local, TimeZone};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(state: &ViewState) -> String {
        let backend = TestBackend::new(120, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), state))
            .unwrap();
        buffer_lines(terminal.backend().buffer()).swap_remove(1)
    }

    #[test]
    fn idle_header_shows_title_and_enabled_control() {
        let line = draw(&ViewState::default());
        assert!(line.contains("Draft Assistant"));
        assert!(line.contains("[r] Refresh"));
        assert!(!line.contains("Refreshing"));
    }

    #[test]
    fn loading_header_shows_disabled_control() {
        let mut state = ViewState::default();
        state.is_loading = true;
        let line = draw(&state);
        assert!(line.contains("[r] Refreshing..."));
    }

    #[test]
    fn status_message_is_verbatim() {
        let mut state = ViewState::default();
        state.status_message = "Refresh failed: error sending request".to_string();
        let line = draw(&state);
        assert!(line.contains("Refresh failed: error sending request"));
    }

    #[test]
    fn last_updated_time_is_shown() {
        let mut state = ViewState::default();
        state.status_message = "Ready.".to_string();
        state.last_updated = Local.with_ymd_and_hms(2025, 8, 20, 19, 5, 9).single();
        let line = draw(&state);
        assert!(line.contains("(updated 19:05:09)"));
    }

    #[test]
    fn control_style_tracks_loading() {
        assert!(refresh_control(true).style.add_modifier.contains(Modifier::DIM));
        assert!(refresh_control(false).style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn failure_status_is_red() {
        assert_eq!(status_style("Refresh failed: boom").fg, Some(Color::Red));
        assert_eq!(status_style("Ready.").fg, Some(Color::Gray));
    }
}
