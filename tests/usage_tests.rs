mod common;

use common::d;

use gkl_analytics::db::{performance_repo, player_repo, roster_repo};
use gkl_analytics::usage::{self, UsageBucket};

#[tokio::test]
async fn test_season_coverage_is_league_wide_min_max() {
    let pool = common::setup_test_db().await;
    common::seed_snapshot(&pool, d(2020, 4, 10), "t1", "Alpha", "p1", "One", "OF").await;
    common::seed_snapshot(&pool, d(2020, 9, 3), "t2", "Bravo", "p2", "Two", "BN").await;
    // A different season must not widen the window.
    common::seed_snapshot(&pool, d(2021, 4, 1), "t1", "Alpha", "p1", "One", "OF").await;

    let coverage = roster_repo::season_coverage(&pool, 2020)
        .await
        .unwrap()
        .expect("coverage should exist");
    assert_eq!(coverage.start, d(2020, 4, 10));
    assert_eq!(coverage.end, d(2020, 9, 3));

    assert!(roster_repo::season_coverage(&pool, 2019).await.unwrap().is_none());
}

#[tokio::test]
async fn test_player_without_rows_yields_empty_fetch() {
    let pool = common::setup_test_db().await;
    common::seed_snapshot(&pool, d(2020, 6, 1), "t1", "Alpha", "p1", "One", "OF").await;

    let rows = roster_repo::get_player_season(&pool, "ghost", 2020).await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_full_month_accounting_with_injected_today() {
    let pool = common::setup_test_db().await;
    // Spec scenario: team a days 1-10 started, team b days 11-20
    // (5 started / 5 benched), inside a 30-day month, today = day 20.
    for day in 1..=10 {
        common::seed_snapshot(&pool, d(2020, 6, day), "a", "Team A", "p1", "Juan Soto", "OF").await;
    }
    for day in 11..=15 {
        common::seed_snapshot(&pool, d(2020, 6, day), "b", "Team B", "p1", "Juan Soto", "1B").await;
    }
    for day in 16..=20 {
        common::seed_snapshot(&pool, d(2020, 6, day), "b", "Team B", "p1", "Juan Soto", "BN").await;
    }

    let rows = roster_repo::get_player_season(&pool, "p1", 2020).await.unwrap();
    let coverage = roster_repo::season_coverage(&pool, 2020).await.unwrap().unwrap();
    let analysis = usage::analyze(&rows, coverage, d(2020, 6, 20)).unwrap();
    let report = &analysis.report;

    assert_eq!(report.current_team_id, "b");
    assert_eq!(report.current_team_name, "Team B");

    let month = &report.months[0];
    assert_eq!(month.total_days, 30);
    assert_eq!(month.started, 5);
    assert_eq!(month.benched, 5);
    assert_eq!(month.other_roster, 10);
    assert_eq!(month.not_rostered, 0);
    assert_eq!(month.future_days, 10);

    // Bucket days + future days cover the whole calendar month.
    let classified = month.started
        + month.benched
        + month.injured_list
        + month.minor_leagues
        + month.other_roster
        + month.not_rostered;
    assert_eq!(classified + month.future_days, month.total_days);

    assert_eq!(report.season_days, 20);
    assert_eq!(report.totals.other_roster.days, 10);
    assert!((report.totals.other_roster.percent - 50.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_performance_key_resolves_latest_name() {
    let pool = common::setup_test_db().await;
    common::seed_snapshot(&pool, d(2020, 6, 1), "t1", "Alpha", "p1", "J. Soto", "OF").await;
    // Ingestion later corrected the name; latest row wins.
    common::seed_snapshot(&pool, d(2020, 6, 2), "t1", "Alpha", "p1", "Juan Soto", "OF").await;

    let key = player_repo::performance_key(&pool, "p1").await.unwrap();
    assert_eq!(key.as_deref(), Some("Juan Soto"));

    let key = player_repo::performance_key(&pool, "ghost").await.unwrap();
    assert!(key.is_none());
}

#[tokio::test]
async fn test_pitching_aggregation_sums_innings_in_thirds() {
    let pool = common::setup_test_db().await;
    common::seed_snapshot(&pool, d(2020, 6, 1), "t1", "Alpha", "p1", "Gerrit Cole", "SP").await;
    common::seed_snapshot(&pool, d(2020, 6, 6), "t1", "Alpha", "p1", "Gerrit Cole", "SP").await;
    common::seed_pitching(&pool, d(2020, 6, 1), "Gerrit Cole", 5.2, 2, 4, 1, 7).await;
    common::seed_pitching(&pool, d(2020, 6, 6), "Gerrit Cole", 3.2, 1, 3, 1, 5).await;

    let rows = roster_repo::get_player_season(&pool, "p1", 2020).await.unwrap();
    let coverage = roster_repo::season_coverage(&pool, 2020).await.unwrap().unwrap();
    let today = d(2020, 6, 6);
    let analysis = usage::analyze(&rows, coverage, today).unwrap();

    let key = player_repo::performance_key(&pool, "p1").await.unwrap().unwrap();
    let perf = performance_repo::get_player_range(&pool, &key, coverage.start, coverage.end)
        .await
        .unwrap();
    assert_eq!(perf.len(), 2);

    let buckets = usage::bucket_performance(&analysis, coverage, today, &perf);
    let started = buckets
        .iter()
        .find(|b| b.bucket == UsageBucket::Started)
        .expect("started bucket");
    let pitching = started.pitching.as_ref().expect("pitching line");

    // 5.2 + 3.2 innings = 28 outs = 9.1 in box-score notation.
    assert_eq!(pitching.outs, 28);
    assert!((pitching.innings_pitched - 9.1).abs() < 1e-9);
    assert_eq!(pitching.appearances, 2);
    assert_eq!(pitching.earned_runs, 3);
    // ERA = 3 * 9 / (28/3)
    let innings = 28.0 / 3.0;
    assert!((pitching.era - 3.0 * 9.0 / innings).abs() < 1e-9);
    assert!((pitching.whip - 9.0 / innings).abs() < 1e-9);
    assert!((pitching.k_bb - 6.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_performance_rows_on_unrostered_days_go_to_not_rostered() {
    let pool = common::setup_test_db().await;
    common::seed_snapshot(&pool, d(2020, 6, 1), "t1", "Alpha", "p1", "Juan Soto", "OF").await;
    // Widen league coverage past the player's roster stay.
    common::seed_snapshot(&pool, d(2020, 6, 10), "t2", "Bravo", "p2", "Other Guy", "OF").await;
    common::seed_batting(&pool, d(2020, 6, 5), "Juan Soto", 4, 2, 0, 0).await;

    let rows = roster_repo::get_player_season(&pool, "p1", 2020).await.unwrap();
    let coverage = roster_repo::season_coverage(&pool, 2020).await.unwrap().unwrap();
    let today = d(2020, 6, 10);
    let analysis = usage::analyze(&rows, coverage, today).unwrap();

    let perf = performance_repo::get_player_range(&pool, "Juan Soto", coverage.start, coverage.end)
        .await
        .unwrap();
    let buckets = usage::bucket_performance(&analysis, coverage, today, &perf);

    let unrostered = buckets
        .iter()
        .find(|b| b.bucket == UsageBucket::NotRostered)
        .expect("not_rostered bucket");
    assert_eq!(unrostered.days, 9);
    assert_eq!(unrostered.batting.as_ref().unwrap().at_bats, 4);
}
