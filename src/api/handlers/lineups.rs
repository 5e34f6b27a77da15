use axum::extract::{Path, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::db::roster_repo;
use crate::errors::AppError;
use crate::models::RosterSnapshot;
use crate::usage::SlotClass;
use crate::AppState;

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineupsResponse {
    pub date: NaiveDate,
    pub summary: LineupSummary,
    pub teams: Vec<TeamLineup>,
}

#[derive(Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LineupSummary {
    pub teams: i64,
    pub players: i64,
    pub started: i64,
    pub benched: i64,
    pub injured_list: i64,
    pub not_active: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamLineup {
    pub team_id: String,
    pub team_name: String,
    pub roster: Vec<LineupRow>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineupRow {
    pub player_id: String,
    pub player_name: String,
    pub mlb_team: String,
    pub eligible_positions: Vec<String>,
    pub player_status: String,
    pub selected_position: String,
}

impl LineupRow {
    fn from_snapshot(row: &RosterSnapshot) -> Self {
        Self {
            player_id: row.player_id.clone(),
            player_name: row.player_name.clone(),
            mlb_team: row.mlb_team.clone(),
            eligible_positions: row.positions(),
            player_status: row.player_status.clone(),
            selected_position: row.selected_position.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /lineups/date/{YYYY-MM-DD} — every team's roster for one day.
pub async fn by_date(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<LineupsResponse>, AppError> {
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("invalid date: {date}")))?;

    let rows = roster_repo::get_date(&state.db, date).await?;

    let mut summary = LineupSummary::default();
    // Rows arrive team-ordered; BTreeMap keeps the grouping stable.
    let mut teams: BTreeMap<(String, String), Vec<LineupRow>> = BTreeMap::new();
    for row in &rows {
        summary.players += 1;
        match SlotClass::from_position(&row.selected_position) {
            SlotClass::Started => summary.started += 1,
            SlotClass::Benched => summary.benched += 1,
            SlotClass::InjuredList => summary.injured_list += 1,
            SlotClass::NotActive => summary.not_active += 1,
        }
        teams
            .entry((row.fantasy_team_name.clone(), row.fantasy_team_id.clone()))
            .or_default()
            .push(LineupRow::from_snapshot(row));
    }
    summary.teams = teams.len() as i64;

    let teams = teams
        .into_iter()
        .map(|((team_name, team_id), roster)| TeamLineup {
            team_id,
            team_name,
            roster,
        })
        .collect();

    Ok(Json(LineupsResponse {
        date,
        summary,
        teams,
    }))
}
