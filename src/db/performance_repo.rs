use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::models::PlayerPerformance;

/// Fetch a player's box-score rows for a date window. `player_key` is the
/// performance store's key (the player name), resolved separately — this
/// store does not share the roster store's id space.
pub async fn get_player_range(
    pool: &SqlitePool,
    player_key: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> anyhow::Result<Vec<PlayerPerformance>> {
    let rows = sqlx::query_as::<_, PlayerPerformance>(
        r#"
        SELECT * FROM player_performance
        WHERE player_name = ? AND date BETWEEN ? AND ?
        ORDER BY date
        "#,
    )
    .bind(player_key)
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
