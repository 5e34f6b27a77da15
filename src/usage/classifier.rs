use serde::{Deserialize, Serialize};
use std::fmt;

/// Injured-list slot codes as they appear in `selected_position`.
pub const INJURED_LIST_CODES: &[&str] = &["IL", "IL10", "IL15", "IL60", "DL"];

/// What a roster slot means on its own, before the current-team question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotClass {
    /// An active field or pitching position.
    Started,
    /// "BN" — on the roster but not in the lineup.
    Benched,
    /// One of the injured-list codes.
    InjuredList,
    /// "NA" — minor leagues / not active.
    NotActive,
}

impl SlotClass {
    pub fn from_position(selected_position: &str) -> Self {
        match selected_position {
            "BN" => SlotClass::Benched,
            "NA" => SlotClass::NotActive,
            p if INJURED_LIST_CODES.contains(&p) => SlotClass::InjuredList,
            _ => SlotClass::Started,
        }
    }
}

// ---------------------------------------------------------------------------
// UsageBucket
// ---------------------------------------------------------------------------

/// Season-usage classification for a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageBucket {
    Started,
    Benched,
    InjuredList,
    MinorLeagues,
    OtherRoster,
    NotRostered,
}

impl UsageBucket {
    /// Classify one snapshot row for the subject player. `on_current_team`
    /// is whether the row's fantasy team matches the player's current team;
    /// a day with no row at all is `NotRostered` and never reaches here.
    pub fn classify(selected_position: &str, on_current_team: bool) -> Self {
        if !on_current_team {
            return UsageBucket::OtherRoster;
        }
        match SlotClass::from_position(selected_position) {
            SlotClass::Started => UsageBucket::Started,
            SlotClass::Benched => UsageBucket::Benched,
            SlotClass::InjuredList => UsageBucket::InjuredList,
            SlotClass::NotActive => UsageBucket::MinorLeagues,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UsageBucket::Started => "started",
            UsageBucket::Benched => "benched",
            UsageBucket::InjuredList => "injured_list",
            UsageBucket::MinorLeagues => "minor_leagues",
            UsageBucket::OtherRoster => "other_roster",
            UsageBucket::NotRostered => "not_rostered",
        }
    }
}

impl fmt::Display for UsageBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
