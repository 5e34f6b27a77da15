use chrono::NaiveDate;
use serde::Serialize;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};

/// Resolve the performance-store key for a roster player. The stats feed
/// keys by name, so the mapping is the player's name on his latest
/// snapshot; None when the player has never appeared on a roster.
pub async fn performance_key(
    pool: &SqlitePool,
    player_id: &str,
) -> anyhow::Result<Option<String>> {
    let name: Option<(String,)> = sqlx::query_as(
        r#"
        SELECT player_name FROM roster_snapshots
        WHERE player_id = ?
        ORDER BY date DESC, fantasy_team_id DESC
        LIMIT 1
        "#,
    )
    .bind(player_id)
    .fetch_optional(pool)
    .await?;

    Ok(name.map(|(n,)| n))
}

// ---------------------------------------------------------------------------
// Player search
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct PlayerSearchFilters {
    /// Substring match on player name.
    pub search: Option<String>,
    /// Eligible-position membership, e.g. "SS".
    pub position: Option<String>,
    pub mlb_team: Option<String>,
    /// Current fantasy team (team on the latest snapshot).
    pub gkl_team: Option<String>,
}

/// One search result: the player's latest-snapshot identity plus roster
/// and transaction aggregates.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummaryRow {
    pub player_id: String,
    pub player_name: String,
    pub mlb_team: String,
    pub eligible_positions: String,
    pub player_status: String,
    pub current_team_id: String,
    pub current_team_name: String,
    pub days_rostered: i64,
    pub first_seen: NaiveDate,
    pub last_seen: NaiveDate,
    pub transaction_count: i64,
}

pub async fn search(
    pool: &SqlitePool,
    filters: &PlayerSearchFilters,
    limit: i64,
    offset: i64,
) -> anyhow::Result<Vec<PlayerSummaryRow>> {
    let mut qb = base_query();
    push_filters(&mut qb, filters);
    qb.push(" GROUP BY r.player_id ORDER BY r.player_name LIMIT ");
    qb.push_bind(limit);
    qb.push(" OFFSET ");
    qb.push_bind(offset);

    let rows = qb.build_query_as::<PlayerSummaryRow>().fetch_all(pool).await?;
    Ok(rows)
}

pub async fn search_count(
    pool: &SqlitePool,
    filters: &PlayerSearchFilters,
) -> anyhow::Result<i64> {
    let mut qb = base_count_query();
    push_filters(&mut qb, filters);
    qb.push(" GROUP BY r.player_id)");

    let (total,): (i64,) = qb.build_query_as().fetch_one(pool).await?;
    Ok(total)
}

fn base_query<'a>() -> QueryBuilder<'a, Sqlite> {
    QueryBuilder::new(
        r#"
        SELECT r.player_id,
               r.player_name,
               r.mlb_team,
               r.eligible_positions,
               r.player_status,
               r.fantasy_team_id AS current_team_id,
               r.fantasy_team_name AS current_team_name,
               s.days_rostered,
               s.first_seen,
               s.last_seen,
               COALESCE(t.transaction_count, 0) AS transaction_count
        FROM roster_snapshots r
        JOIN (
            SELECT player_id,
                   COUNT(*) AS days_rostered,
                   MIN(date) AS first_seen,
                   MAX(date) AS last_seen
            FROM roster_snapshots
            GROUP BY player_id
        ) s ON s.player_id = r.player_id AND r.date = s.last_seen
        LEFT JOIN (
            SELECT player_id, COUNT(*) AS transaction_count
            FROM transactions
            GROUP BY player_id
        ) t ON t.player_id = r.player_id
        WHERE 1=1
        "#,
    )
}

fn base_count_query<'a>() -> QueryBuilder<'a, Sqlite> {
    QueryBuilder::new(
        r#"
        SELECT COUNT(*) FROM (
        SELECT r.player_id
        FROM roster_snapshots r
        JOIN (
            SELECT player_id,
                   MAX(date) AS last_seen
            FROM roster_snapshots
            GROUP BY player_id
        ) s ON s.player_id = r.player_id AND r.date = s.last_seen
        WHERE 1=1
        "#,
    )
}

fn push_filters<'a>(qb: &mut QueryBuilder<'a, Sqlite>, filters: &'a PlayerSearchFilters) {
    if let Some(search) = &filters.search {
        qb.push(" AND r.player_name LIKE ");
        qb.push_bind(format!("%{search}%"));
    }
    if let Some(position) = &filters.position {
        // eligible_positions is a comma-joined list; wrap both sides so
        // membership is exact, not substring ("S" must not match "SS").
        qb.push(" AND (',' || r.eligible_positions || ',') LIKE ");
        qb.push_bind(format!("%,{position},%"));
    }
    if let Some(mlb_team) = &filters.mlb_team {
        qb.push(" AND r.mlb_team = ");
        qb.push_bind(mlb_team.as_str());
    }
    if let Some(gkl_team) = &filters.gkl_team {
        qb.push(" AND r.fantasy_team_name = ");
        qb.push_bind(gkl_team.as_str());
    }
}
