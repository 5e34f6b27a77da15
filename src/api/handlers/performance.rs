use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;

use crate::db::{performance_repo, player_repo};
use crate::errors::AppError;
use crate::usage::{self, BucketPerformance};
use crate::AppState;

use super::spotlight::{load_player_season, resolve_season, today, PlayerInfo, SeasonQuery};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownResponse {
    pub player: PlayerInfo,
    pub season: i32,
    pub buckets: Vec<BucketPerformance>,
}

/// GET /players/{player_id}/performance-breakdown?season=YYYY — batting and
/// pitching aggregates per usage bucket. A failed stats join degrades to
/// day counts only; roster usage is the primary payload.
pub async fn breakdown(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
    Query(query): Query<SeasonQuery>,
) -> Result<Json<BreakdownResponse>, AppError> {
    let season = resolve_season(query.season)?;
    let (rows, coverage) = load_player_season(&state, &player_id, season).await?;

    let today = today();
    let analysis = usage::analyze(&rows, coverage, today)
        .ok_or_else(|| AppError::NotFound(format!("no roster data for player {player_id}")))?;
    let player = PlayerInfo::from_latest(&rows)
        .ok_or_else(|| AppError::NotFound(format!("no roster data for player {player_id}")))?;

    // The stats store keys by name, not player_id; resolve explicitly.
    let performance = match player_repo::performance_key(&state.db, &player_id).await {
        Ok(Some(key)) => {
            match performance_repo::get_player_range(&state.db, &key, coverage.start, coverage.end)
                .await
            {
                Ok(rows) => rows,
                Err(e) => {
                    tracing::warn!(
                        player_id = %player_id,
                        error = %e,
                        "Performance lookup failed; returning usage-only breakdown"
                    );
                    Vec::new()
                }
            }
        }
        Ok(None) => Vec::new(),
        Err(e) => {
            tracing::warn!(
                player_id = %player_id,
                error = %e,
                "Performance key resolution failed; returning usage-only breakdown"
            );
            Vec::new()
        }
    };

    let buckets = usage::bucket_performance(&analysis, coverage, today, &performance);

    Ok(Json(BreakdownResponse {
        player,
        season,
        buckets,
    }))
}
