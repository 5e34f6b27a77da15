use chrono::NaiveDate;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::models::{MovementType, Transaction};

/// Whitelisted optional filters for the transaction list. Everything is
/// ANDed; absent fields add no clause.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilters {
    /// Substring match on player name.
    pub search: Option<String>,
    pub movement_type: Option<MovementType>,
    /// Matches either side of the move.
    pub team_name: Option<String>,
    /// Player's MLB team.
    pub player_team: Option<String>,
    pub player_position: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

pub async fn list(
    pool: &SqlitePool,
    filters: &TransactionFilters,
    limit: i64,
    offset: i64,
) -> anyhow::Result<Vec<Transaction>> {
    let mut qb = QueryBuilder::new("SELECT * FROM transactions WHERE 1=1");
    push_filters(&mut qb, filters);
    qb.push(" ORDER BY date DESC, timestamp DESC, transaction_id DESC LIMIT ");
    qb.push_bind(limit);
    qb.push(" OFFSET ");
    qb.push_bind(offset);

    let rows = qb.build_query_as::<Transaction>().fetch_all(pool).await?;
    Ok(rows)
}

pub async fn count(pool: &SqlitePool, filters: &TransactionFilters) -> anyhow::Result<i64> {
    let mut qb = QueryBuilder::new("SELECT COUNT(*) FROM transactions WHERE 1=1");
    push_filters(&mut qb, filters);

    let (total,): (i64,) = qb.build_query_as().fetch_one(pool).await?;
    Ok(total)
}

fn push_filters<'a>(qb: &mut QueryBuilder<'a, Sqlite>, filters: &'a TransactionFilters) {
    if let Some(search) = &filters.search {
        qb.push(" AND player_name LIKE ");
        qb.push_bind(format!("%{search}%"));
    }
    if let Some(movement) = &filters.movement_type {
        qb.push(" AND movement_type = ");
        qb.push_bind(movement.as_str());
    }
    if let Some(team) = &filters.team_name {
        qb.push(" AND (source_team_name = ");
        qb.push_bind(team.as_str());
        qb.push(" OR destination_team_name = ");
        qb.push_bind(team.as_str());
        qb.push(")");
    }
    if let Some(mlb_team) = &filters.player_team {
        qb.push(" AND player_team = ");
        qb.push_bind(mlb_team.as_str());
    }
    if let Some(position) = &filters.player_position {
        qb.push(" AND player_position = ");
        qb.push_bind(position.as_str());
    }
    if let Some(start) = filters.start_date {
        qb.push(" AND date >= ");
        qb.push_bind(start);
    }
    if let Some(end) = filters.end_date {
        qb.push(" AND date <= ");
        qb.push_bind(end);
    }
}
