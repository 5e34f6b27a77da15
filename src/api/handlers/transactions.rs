use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::pagination::{PageParams, Pagination};
use crate::db::transaction_repo::{self, TransactionFilters};
use crate::errors::AppError;
use crate::models::{MovementType, Transaction};
use crate::AppState;

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TransactionQuery {
    pub search: Option<String>,
    pub movement_type: Option<String>,
    pub team_name: Option<String>,
    pub player_team: Option<String>,
    pub player_position: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Serialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<Transaction>,
    pub pagination: Pagination,
}

fn parse_date(field: &str, value: Option<String>) -> Result<Option<NaiveDate>, AppError> {
    value
        .filter(|v| !v.is_empty())
        .map(|v| {
            NaiveDate::parse_from_str(&v, "%Y-%m-%d")
                .map_err(|_| AppError::BadRequest(format!("invalid {field}: {v}")))
        })
        .transpose()
}

fn build_filters(query: TransactionQuery) -> Result<(TransactionFilters, PageParams), AppError> {
    let page = PageParams {
        page: query.page,
        limit: query.limit,
    };
    let movement_type = query
        .movement_type
        .filter(|v| !v.is_empty())
        .map(|v| {
            MovementType::from_api_str(&v)
                .ok_or_else(|| AppError::BadRequest(format!("invalid movementType: {v}")))
        })
        .transpose()?;

    let filters = TransactionFilters {
        search: query.search.filter(|v| !v.is_empty()),
        movement_type,
        team_name: query.team_name.filter(|v| !v.is_empty()),
        player_team: query.player_team.filter(|v| !v.is_empty()),
        player_position: query.player_position.filter(|v| !v.is_empty()),
        start_date: parse_date("startDate", query.start_date)?,
        end_date: parse_date("endDate", query.end_date)?,
    };
    Ok((filters, page))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /transactions — filtered, paginated roster-move log.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<TransactionQuery>,
) -> Result<Json<TransactionsResponse>, AppError> {
    let (filters, page_params) = build_filters(query)?;
    let (page, limit) = page_params.normalize();

    let total = transaction_repo::count(&state.db, &filters).await?;
    let pagination = Pagination::new(page, limit, total);
    let transactions =
        transaction_repo::list(&state.db, &filters, limit, pagination.offset()).await?;

    Ok(Json(TransactionsResponse {
        transactions,
        pagination,
    }))
}
