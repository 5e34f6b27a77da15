use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::pagination::{PageParams, Pagination};
use crate::db::player_repo::{self, PlayerSearchFilters, PlayerSummaryRow};
use crate::errors::AppError;
use crate::AppState;

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSearchQuery {
    pub search: Option<String>,
    pub position: Option<String>,
    pub mlb_team: Option<String>,
    pub gkl_team: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Serialize)]
pub struct PlayerSearchResponse {
    pub players: Vec<PlayerSummaryRow>,
    pub pagination: Pagination,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /player-search/search — paginated player summaries with roster and
/// transaction aggregates.
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<PlayerSearchQuery>,
) -> Result<Json<PlayerSearchResponse>, AppError> {
    let filters = PlayerSearchFilters {
        search: query.search.filter(|v| !v.is_empty()),
        position: query.position.filter(|v| !v.is_empty()),
        mlb_team: query.mlb_team.filter(|v| !v.is_empty()),
        gkl_team: query.gkl_team.filter(|v| !v.is_empty()),
    };
    let (page, limit) = PageParams {
        page: query.page,
        limit: query.limit,
    }
    .normalize();

    let total = player_repo::search_count(&state.db, &filters).await?;
    let pagination = Pagination::new(page, limit, total);
    let players = player_repo::search(&state.db, &filters, limit, pagination.offset()).await?;

    Ok(Json(PlayerSearchResponse {
        players,
        pagination,
    }))
}
