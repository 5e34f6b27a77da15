use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// One leg of a roster move from the append-only transaction log.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Transaction {
    pub transaction_id: String,
    pub date: NaiveDate,
    pub timestamp: i64,
    pub movement_type: String,
    pub player_id: String,
    pub player_name: String,
    pub player_position: String,
    pub player_team: String,
    pub source_team_key: Option<String>,
    pub source_team_name: Option<String>,
    pub destination_team_key: Option<String>,
    pub destination_team_name: Option<String>,
}

// ---------------------------------------------------------------------------
// MovementType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementType {
    Add,
    Drop,
    Trade,
}

impl MovementType {
    pub fn from_api_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "add" => Some(MovementType::Add),
            "drop" => Some(MovementType::Drop),
            "trade" => Some(MovementType::Trade),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MovementType::Add => "add",
            MovementType::Drop => "drop",
            MovementType::Trade => "trade",
        }
    }
}

impl fmt::Display for MovementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
