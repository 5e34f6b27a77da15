use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::models::RosterSnapshot;
use crate::usage::Coverage;

/// Fetch every snapshot row for a player within a season, date-ascending.
pub async fn get_player_season(
    pool: &SqlitePool,
    player_id: &str,
    season: i32,
) -> anyhow::Result<Vec<RosterSnapshot>> {
    let rows = sqlx::query_as::<_, RosterSnapshot>(
        r#"
        SELECT * FROM roster_snapshots
        WHERE player_id = ? AND date BETWEEN ? AND ?
        ORDER BY date, fantasy_team_id
        "#,
    )
    .bind(player_id)
    .bind(season_start(season))
    .bind(season_end(season))
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// The league-wide span of ingested dates for a season; None when nothing
/// has been ingested for that year yet.
pub async fn season_coverage(pool: &SqlitePool, season: i32) -> anyhow::Result<Option<Coverage>> {
    let (start, end): (Option<NaiveDate>, Option<NaiveDate>) = sqlx::query_as(
        "SELECT MIN(date), MAX(date) FROM roster_snapshots WHERE date BETWEEN ? AND ?",
    )
    .bind(season_start(season))
    .bind(season_end(season))
    .fetch_one(pool)
    .await?;

    Ok(match (start, end) {
        (Some(start), Some(end)) => Some(Coverage { start, end }),
        _ => None,
    })
}

/// All roster rows for one calendar day, grouped by team on the way out.
pub async fn get_date(pool: &SqlitePool, date: NaiveDate) -> anyhow::Result<Vec<RosterSnapshot>> {
    let rows = sqlx::query_as::<_, RosterSnapshot>(
        r#"
        SELECT * FROM roster_snapshots
        WHERE date = ?
        ORDER BY fantasy_team_name, player_name
        "#,
    )
    .bind(date)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

fn season_start(season: i32) -> String {
    format!("{season:04}-01-01")
}

fn season_end(season: i32) -> String {
    format!("{season:04}-12-31")
}
