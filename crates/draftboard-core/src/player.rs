// Player and suggestion payloads as served by the draft-assistant backend.

use serde::{Deserialize, Serialize};

/// A ranked player row from `/api/players` or `/api/suggestions`.
///
/// The ranking fields are computed by the backend and may be absent (or
/// `null`) until it has ranked the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    #[serde(rename = "player_id")]
    pub id: String,
    #[serde(rename = "clean_name")]
    pub name: String,
    pub position: String,
    pub team: String,
    /// Coarse rank grouping.
    pub tier: Option<f64>,
    /// Expert-consensus rank.
    pub ecr_rank: Option<f64>,
    /// Composite rank blended from several sources.
    pub blended_rank: Option<f64>,
    /// Average draft position.
    pub adp: Option<f64>,
}

impl Player {
    /// `"RB-SF"` style position/team tag.
    pub fn position_team(&self) -> String {
        format!("{}-{}", self.position, self.team)
    }
}

/// The two suggestion lists, in the backend's rank order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestionBundle {
    /// Primary on-deck candidates.
    pub top: Vec<Player>,
    /// Secondary candidates.
    pub next: Vec<Player>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
