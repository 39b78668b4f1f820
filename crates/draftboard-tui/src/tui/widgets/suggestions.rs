// Suggestion panels: On Deck (top picks) and Next Up (secondary picks).
//
// Each entry is two lines: "Name (POS-TEAM)" and
// "Tier t · ECR e · ADP a", with dashes for missing rankings.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use draftboard_core::player::Player;

use crate::tui::format::entry_stats;

/// Render a suggestion list under `title`. `None` (no suggestions fetched
/// yet) and an empty list both render an empty panel.
pub fn render(frame: &mut Frame, area: Rect, title: &str, players: Option<&[Player]>) {
    let items: Vec<ListItem> = players
        .unwrap_or_default()
        .iter()
        .map(entry_item)
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_string()),
    );
    frame.render_widget(list, area);
}

fn entry_item(player: &Player) -> ListItem<'static> {
    let heading = Line::from(vec![
        Span::styled(
            player.name.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            format!("({})", player.position_team()),
            Style::default().fg(Color::Gray),
        ),
    ]);
    let stats = Line::from(Span::styled(
        entry_stats(player),
        Style::default().fg(stats_color(player)),
    ));
    ListItem::new(vec![heading, stats])
}

/// Dim the stats line when nothing has been ranked yet.
fn stats_color(player: &Player) -> Color {
    let all_missing = player.tier.is_none() && player.ecr_rank.is_none() && player.adp.is_none();
    if all_missing {
        Color::DarkGray
    } else {
        Color::Cyan
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::test_support::buffer_lines;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn ranked() -> Player {
        Player {
            id: "2".to_string(),
            name: "B".to_string(),
            position: "RB".to_string(),
            team: "SF".to_string(),
            tier: Some(1.0),
            ecr_rank: Some(5.0),
            blended_rank: None,
            adp: Some(12.3),
        }
    }

    fn unranked() -> Player {
        Player {
            id: "1".to_string(),
            name: "A".to_string(),
            position: "WR".to_string(),
            team: "KC".to_string(),
            tier: None,
            ecr_rank: None,
            blended_rank: None,
            adp: None,
        }
    }

    fn draw(players: Option<&[Player]>) -> Vec<String> {
        let backend = TestBackend::new(40, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), "On Deck", players))
            .unwrap();
        buffer_lines(terminal.backend().buffer())
    }

    #[test]
    fn renders_entry_lines() {
        let players = vec![ranked()];
        let lines = draw(Some(players.as_slice()));
        assert!(lines[0].contains("On Deck"));
        assert!(lines[1].contains("B (RB-SF)"));
        assert!(lines[2].contains("Tier 1 · ECR 5 · ADP 12.3"));
    }

    #[test]
    fn missing_rankings_show_dashes() {
        let players = vec![unranked()];
        let lines = draw(Some(players.as_slice()));
        assert!(lines[1].contains("A (WR-KC)"));
        assert!(lines[2].contains("Tier - · ECR - · ADP -"));
    }

    #[test]
    fn entries_keep_received_order() {
        let players = vec![unranked(), ranked()];
        let lines = draw(Some(players.as_slice()));
        assert!(lines[1].contains("A (WR-KC)"));
        assert!(lines[3].contains("B (RB-SF)"));
    }

    #[test]
    fn absent_suggestions_render_empty_panel() {
        let lines = draw(None);
        assert!(lines[0].contains("On Deck"));
        assert!(lines[1..7].iter().all(|l| !l.contains("Tier")));
    }

    #[test]
    fn stats_dimmed_only_when_everything_missing() {
        assert_eq!(stats_color(&unranked()), Color::DarkGray);
        assert_eq!(stats_color(&ranked()), Color::Cyan);
    }
}
