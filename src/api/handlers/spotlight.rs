use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::db::roster_repo;
use crate::errors::AppError;
use crate::models::RosterSnapshot;
use crate::usage::{self, Coverage, TeamStint, UsageReport};
use crate::AppState;

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct SeasonQuery {
    pub season: Option<i32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInfo {
    pub player_id: String,
    pub player_name: String,
    pub mlb_team: String,
    pub eligible_positions: Vec<String>,
    pub player_status: String,
}

impl PlayerInfo {
    /// Identity as of the player's latest snapshot in the season.
    pub fn from_latest(rows: &[RosterSnapshot]) -> Option<Self> {
        let latest = rows.iter().max_by_key(|r| r.date)?;
        Some(Self {
            player_id: latest.player_id.clone(),
            player_name: latest.player_name.clone(),
            mlb_team: latest.mlb_team.clone(),
            eligible_positions: latest.positions(),
            player_status: latest.player_status.clone(),
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentTeam {
    pub team_id: String,
    pub team_name: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotlightResponse {
    pub player: PlayerInfo,
    pub season: i32,
    pub current_team: CurrentTeam,
    pub team_history: Vec<TeamStint>,
    pub usage: UsageReport,
}

// ---------------------------------------------------------------------------
// Shared season helpers
// ---------------------------------------------------------------------------

pub fn resolve_season(query: Option<i32>) -> Result<i32, AppError> {
    let season = query.unwrap_or_else(|| Utc::now().year());
    if !(2000..=2100).contains(&season) {
        return Err(AppError::BadRequest(format!("invalid season: {season}")));
    }
    Ok(season)
}

/// Player rows + league coverage for a season; not-found when the player
/// never appears, so callers never build a degenerate empty aggregate.
pub async fn load_player_season(
    state: &AppState,
    player_id: &str,
    season: i32,
) -> Result<(Vec<RosterSnapshot>, Coverage), AppError> {
    let rows = roster_repo::get_player_season(&state.db, player_id, season).await?;
    if rows.is_empty() {
        return Err(AppError::NotFound(format!(
            "no roster data for player {player_id} in {season}"
        )));
    }
    let coverage = roster_repo::season_coverage(&state.db, season)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("no roster data for season {season}")))?;
    Ok((rows, coverage))
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /players/{player_id}/spotlight?season=YYYY — season usage breakdown.
pub async fn spotlight(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
    Query(query): Query<SeasonQuery>,
) -> Result<Json<SpotlightResponse>, AppError> {
    let season = resolve_season(query.season)?;
    let (rows, coverage) = load_player_season(&state, &player_id, season).await?;

    let analysis = usage::analyze(&rows, coverage, today())
        .ok_or_else(|| AppError::NotFound(format!("no roster data for player {player_id}")))?;
    let player = PlayerInfo::from_latest(&rows)
        .ok_or_else(|| AppError::NotFound(format!("no roster data for player {player_id}")))?;

    let report = analysis.report;
    Ok(Json(SpotlightResponse {
        player,
        season,
        current_team: CurrentTeam {
            team_id: report.current_team_id.clone(),
            team_name: report.current_team_name.clone(),
        },
        team_history: report.team_history.clone(),
        usage: report,
    }))
}
