use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One day's recorded placement of a player within a fantasy team's lineup.
/// Inserted once per (date, team, player) by the ingestion job; immutable.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RosterSnapshot {
    pub date: NaiveDate,
    pub fantasy_team_id: String,
    pub fantasy_team_name: String,
    pub player_id: String,
    pub player_name: String,
    pub mlb_team: String,
    /// Comma-joined position codes as stored, e.g. "1B,3B,Util".
    pub eligible_positions: String,
    pub player_status: String,
    /// The slot occupied that day: an active position, "BN", an IL code, or "NA".
    pub selected_position: String,
}

impl RosterSnapshot {
    /// Eligible positions split back into an ordered list.
    pub fn positions(&self) -> Vec<String> {
        self.eligible_positions
            .split(',')
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect()
    }
}
