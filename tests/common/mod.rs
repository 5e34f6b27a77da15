use chrono::NaiveDate;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use gkl_analytics::config::AppConfig;
use gkl_analytics::AppState;

/// Open an in-memory database and apply the schema. One connection only:
/// each sqlite :memory: connection is its own database.
#[allow(dead_code)]
pub async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

#[allow(dead_code)]
pub async fn build_test_app() -> (axum::Router, SqlitePool) {
    let pool = setup_test_db().await;
    let config = AppConfig {
        database_url: "sqlite::memory:".into(),
        host: "127.0.0.1".into(),
        port: 0,
        expose_error_details: false,
    };
    let state = AppState {
        db: pool.clone(),
        config,
    };
    (gkl_analytics::api::router::create_router(state), pool)
}

/// Seed one roster snapshot row with healthy defaults.
#[allow(dead_code)]
pub async fn seed_snapshot(
    pool: &SqlitePool,
    date: NaiveDate,
    team_id: &str,
    team_name: &str,
    player_id: &str,
    player_name: &str,
    selected_position: &str,
) {
    sqlx::query(
        r#"
        INSERT INTO roster_snapshots
            (date, fantasy_team_id, fantasy_team_name, player_id, player_name,
             mlb_team, eligible_positions, player_status, selected_position)
        VALUES (?, ?, ?, ?, ?, 'NYY', 'OF,Util', 'healthy', ?)
        "#,
    )
    .bind(date)
    .bind(team_id)
    .bind(team_name)
    .bind(player_id)
    .bind(player_name)
    .bind(selected_position)
    .execute(pool)
    .await
    .expect("Failed to seed snapshot");
}

/// Seed a batting day in the performance store (keyed by name).
#[allow(dead_code)]
pub async fn seed_batting(
    pool: &SqlitePool,
    date: NaiveDate,
    player_name: &str,
    at_bats: i64,
    hits: i64,
    home_runs: i64,
    walks: i64,
) {
    sqlx::query(
        r#"
        INSERT INTO player_performance (date, player_name, at_bats, hits, home_runs, walks)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(date)
    .bind(player_name)
    .bind(at_bats)
    .bind(hits)
    .bind(home_runs)
    .bind(walks)
    .execute(pool)
    .await
    .expect("Failed to seed batting day");
}

/// Seed a pitching day in the performance store.
#[allow(dead_code)]
pub async fn seed_pitching(
    pool: &SqlitePool,
    date: NaiveDate,
    player_name: &str,
    innings_pitched: f64,
    earned_runs: i64,
    hits_allowed: i64,
    walks_allowed: i64,
    strikeouts_thrown: i64,
) {
    sqlx::query(
        r#"
        INSERT INTO player_performance
            (date, player_name, innings_pitched, earned_runs, hits_allowed,
             walks_allowed, strikeouts_thrown)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(date)
    .bind(player_name)
    .bind(innings_pitched)
    .bind(earned_runs)
    .bind(hits_allowed)
    .bind(walks_allowed)
    .bind(strikeouts_thrown)
    .execute(pool)
    .await
    .expect("Failed to seed pitching day");
}

/// Seed one transaction leg.
#[allow(dead_code)]
pub async fn seed_transaction(
    pool: &SqlitePool,
    transaction_id: &str,
    date: NaiveDate,
    movement_type: &str,
    player_id: &str,
    player_name: &str,
    source_team_name: Option<&str>,
    destination_team_name: Option<&str>,
) {
    sqlx::query(
        r#"
        INSERT INTO transactions
            (transaction_id, date, timestamp, movement_type, player_id, player_name,
             player_position, player_team, source_team_name, destination_team_name)
        VALUES (?, ?, 0, ?, ?, ?, 'OF', 'NYY', ?, ?)
        "#,
    )
    .bind(transaction_id)
    .bind(date)
    .bind(movement_type)
    .bind(player_id)
    .bind(player_name)
    .bind(source_team_name)
    .bind(destination_team_name)
    .execute(pool)
    .await
    .expect("Failed to seed transaction");
}

#[allow(dead_code)]
pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}
