//! Tests for SyncService ordering, dependency gating, and staleness skips.

use chrono::NaiveDate;
use fastbreak::data::refresh::{RefreshKind, RefreshRepository};
use fastbreak::service::sync::SyncService;
use fastbreak_test_utils::constant::TEST_SEASON;
use fastbreak_test_utils::prelude::*;

use crate::sync::fast_limiter;

fn game_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
}

/// Tests that a standings sync refuses to run before the team directory has
/// ever synced, without touching the provider.
///
/// Expected: false, standings endpoint never called
#[tokio::test]
async fn standings_wait_for_teams_sync() -> Result<(), TestError> {
    let mut test = test_setup_with_league_tables!()?;

    let mock = test
        .provider_fixtures()
        .create_standings_endpoint(vec![factory::mock_standing(1, "West", 1)], 0);
    test.mocks.push(mock);

    let service =
        SyncService::with_rate_limiter(&test.db, &test.provider, TEST_SEASON, fast_limiter());
    assert!(!service.sync_standings().await);

    test.assert_mocks();

    Ok(())
}

/// Tests that a roster sync refuses to run before the team directory has
/// ever synced, without touching the provider.
///
/// Expected: false, roster endpoint never called
#[tokio::test]
async fn roster_sync_waits_for_teams_sync() -> Result<(), TestError> {
    let mut test = test_setup_with_league_tables!()?;

    let mock = test.provider_fixtures().create_roster_endpoint(1, vec![], 0);
    test.mocks.push(mock);

    let service =
        SyncService::with_rate_limiter(&test.db, &test.provider, TEST_SEASON, fast_limiter());
    assert!(!service.sync_roster_and_stats(1).await);

    test.assert_mocks();

    Ok(())
}

/// Tests that a roster sync for a team the directory has never seen is
/// refused after the dependency gate passes.
///
/// Expected: false for the unknown team
#[tokio::test]
async fn roster_sync_refuses_unknown_team() -> Result<(), TestError> {
    let mut test = test_setup_with_league_tables!()?;

    let mock = test
        .provider_fixtures()
        .create_teams_endpoint(vec![factory::mock_team(1, "LAL")], 1);
    test.mocks.push(mock);

    let service =
        SyncService::with_rate_limiter(&test.db, &test.provider, TEST_SEASON, fast_limiter());
    assert!(service.sync_teams().await);
    assert!(!service.sync_roster_and_stats(999).await);

    test.assert_mocks();

    Ok(())
}

/// Tests that a kind synced within its maximum age is skipped without a
/// provider call.
///
/// Expected: both calls true, teams endpoint called exactly once
#[tokio::test]
async fn fresh_kind_skips_provider_fetch() -> Result<(), TestError> {
    let mut test = test_setup_with_league_tables!()?;

    let mock = test
        .provider_fixtures()
        .create_teams_endpoint(vec![factory::mock_team(1, "LAL")], 1);
    test.mocks.push(mock);

    let service =
        SyncService::with_rate_limiter(&test.db, &test.provider, TEST_SEASON, fast_limiter());
    assert!(service.sync_teams().await);
    assert!(service.sync_teams().await);

    test.assert_mocks();

    Ok(())
}

/// Tests a full refresh against a fully mocked provider.
///
/// Expected: every kind succeeds and is marked refreshed
#[tokio::test]
async fn full_refresh_marks_every_kind() -> Result<(), TestError> {
    use fastbreak::provider::model::Scoreboard;

    let mut test = test_setup_with_league_tables!()?;

    let mut fixtures = test.provider_fixtures();
    let mocks = vec![
        fixtures.create_teams_endpoint(vec![factory::mock_team(1, "LAL")], 1),
        fixtures.create_standings_endpoint(vec![factory::mock_standing(1, "West", 1)], 1),
        fixtures.create_scoreboard_endpoint(
            Scoreboard {
                games: vec![],
                line_scores: vec![],
            },
            1,
        ),
        fixtures.create_roster_endpoint(1, vec![], 1),
        fixtures.create_dashboard_endpoint(1, factory::mock_dashboard(111.0), 1),
    ];
    test.mocks = mocks;

    let service =
        SyncService::with_rate_limiter(&test.db, &test.provider, TEST_SEASON, fast_limiter());
    let report = service.full_refresh(game_date()).await;

    assert!(report.is_success(), "report: {:?}", report);
    assert!(report.failed_team_ids.is_empty());

    let refresh_repo = RefreshRepository::new(&test.db);
    for kind in [
        RefreshKind::Teams,
        RefreshKind::Standings,
        RefreshKind::Games,
        RefreshKind::Rosters,
    ] {
        assert!(refresh_repo.has_completed(kind).await?, "{} not marked", kind);
    }

    test.assert_mocks();

    Ok(())
}

/// Tests that one failing team keeps the roster kind unmarked so the next
/// refresh retries the fleet, while the other kinds still succeed.
///
/// Expected: rosters false with the failing team reported, rosters kind
/// still due
#[tokio::test]
async fn partial_roster_failure_keeps_kind_due() -> Result<(), TestError> {
    use fastbreak::provider::model::Scoreboard;

    let mut test = test_setup_with_league_tables!()?;

    let mut fixtures = test.provider_fixtures();
    let mocks = vec![
        fixtures.create_teams_endpoint(
            vec![factory::mock_team(1, "LAL"), factory::mock_team(2, "BOS")],
            1,
        ),
        fixtures.create_standings_endpoint(
            vec![
                factory::mock_standing(1, "West", 1),
                factory::mock_standing(2, "East", 1),
            ],
            1,
        ),
        fixtures.create_scoreboard_endpoint(
            Scoreboard {
                games: vec![],
                line_scores: vec![],
            },
            1,
        ),
        fixtures.create_roster_endpoint(1, vec![], 1),
        fixtures.create_dashboard_endpoint(1, factory::mock_dashboard(111.0), 1),
        // Not found is a permanent failure, so a single attempt
        fixtures.create_error_endpoint("/teams/2/roster", 404, 1),
    ];
    test.mocks = mocks;

    let service =
        SyncService::with_rate_limiter(&test.db, &test.provider, TEST_SEASON, fast_limiter());
    let report = service.full_refresh(game_date()).await;

    assert!(report.teams);
    assert!(report.standings);
    assert!(report.games);
    assert!(!report.rosters);
    assert_eq!(report.failed_team_ids, vec![2]);

    let refresh_repo = RefreshRepository::new(&test.db);
    assert!(!refresh_repo.has_completed(RefreshKind::Rosters).await?);

    test.assert_mocks();

    Ok(())
}
