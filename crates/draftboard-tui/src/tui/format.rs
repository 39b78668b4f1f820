// Display formatting for player statistics.
//
// Missing rankings are shown differently depending on where the player
// appears: the players table leaves the cell blank, the suggestion panels
// print a dash. `Placeholder` names that rule.

use draftboard_core::player::Player;

/// How an absent statistic is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// Empty cell (players table).
    Blank,
    /// `-` (On Deck / Next Up panels).
    Dash,
}

impl Placeholder {
    pub fn as_str(self) -> &'static str {
        match self {
            Placeholder::Blank => "",
            Placeholder::Dash => "-",
        }
    }
}

/// Placeholder used in the players table.
pub const TABLE_PLACEHOLDER: Placeholder = Placeholder::Blank;

/// Placeholder used in the suggestion panels.
pub const PANEL_PLACEHOLDER: Placeholder = Placeholder::Dash;

/// Format a statistic in its shortest form (`1`, `12.3`).
pub fn format_stat(value: Option<f64>, placeholder: Placeholder) -> String {
    match value {
        // Adding +0.0 folds -0.0 into 0.0 so it never prints as `-0`.
        Some(v) => format!("{}", v + 0.0),
        None => placeholder.as_str().to_string(),
    }
}

/// Blended rank to one decimal place, blank when absent.
///
/// Exact ties round away from zero (`8.25` shows as `8.3`); `{:.1}` alone
/// would round them to even.
pub fn format_blend(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}", (v * 10.0).round() / 10.0),
        None => TABLE_PLACEHOLDER.as_str().to_string(),
    }
}

/// Players table cells: Name, Pos, Team, Tier, ECR, ADP, Blend.
pub fn table_cells(player: &Player) -> [String; 7] {
    [
        player.name.clone(),
        player.position.clone(),
        player.team.clone(),
        format_stat(player.tier, TABLE_PLACEHOLDER),
        format_stat(player.ecr_rank, TABLE_PLACEHOLDER),
        format_stat(player.adp, TABLE_PLACEHOLDER),
        format_blend(player.blended_rank),
    ]
}

/// First line of a suggestion entry: `"B (RB-SF)"`.
pub fn entry_heading(player: &Player) -> String {
    format!("{} ({})", player.name, player.position_team())
}

/// Second line of a suggestion entry: `"Tier 1 · ECR 5 · ADP 12.3"`.
pub fn entry_stats(player: &Player) -> String {
    format!(
        "Tier {} · ECR {} · ADP {}",
        format_stat(player.tier, PANEL_PLACEHOLDER),
        format_stat(player.ecr_rank, PANEL_PLACEHOLDER),
        format_stat(player.adp, PANEL_PLACEHOLDER),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
