use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One day's raw box-score counts for a player. The stats feed keys these
/// rows by player name, not by the roster store's player_id.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PlayerPerformance {
    pub date: NaiveDate,
    pub player_name: String,

    // Batting
    pub at_bats: i64,
    pub hits: i64,
    pub doubles: i64,
    pub triples: i64,
    pub home_runs: i64,
    pub runs: i64,
    pub rbis: i64,
    pub stolen_bases: i64,
    pub walks: i64,
    pub strikeouts: i64,
    pub hit_by_pitch: i64,
    pub sacrifice_flies: i64,

    // Pitching; innings in box-score notation (6.1 = six and one third)
    pub innings_pitched: f64,
    pub earned_runs: i64,
    pub hits_allowed: i64,
    pub walks_allowed: i64,
    pub strikeouts_thrown: i64,
}

impl PlayerPerformance {
    /// True when the row records any plate appearance.
    pub fn batted(&self) -> bool {
        self.at_bats > 0 || self.walks > 0 || self.hit_by_pitch > 0 || self.sacrifice_flies > 0
    }

    /// True when the row records any pitching work.
    pub fn pitched(&self) -> bool {
        self.innings_pitched > 0.0
    }
}
