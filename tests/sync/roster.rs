//! Tests for RosterSync: roster, player averages, and team dashboard.

use fastbreak::data::{
    player::PlayerRepository, player_stats::PlayerStatsRepository, team_stats::TeamStatsRepository,
};
use fastbreak::service::sync::roster::RosterSync;
use fastbreak_test_utils::constant::TEST_SEASON;
use fastbreak_test_utils::prelude::*;

use crate::sync::fast_limiter;

/// Tests a full roster pass: players persisted, averages computed from the
/// game log, and the team dashboard written.
///
/// Expected: Ok(1) with player, statistics, and dashboard rows present
#[tokio::test]
async fn syncs_roster_stats_and_dashboard() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(
        entity::prelude::Team,
        entity::prelude::TeamStats,
        entity::prelude::Player,
        entity::prelude::PlayerStats,
    )?;

    let mut fixtures = test.provider_fixtures();
    let mocks = vec![
        fixtures.create_roster_endpoint(1, vec![factory::mock_roster_entry(42, "Test Player")], 1),
        fixtures.create_game_log_endpoint(
            42,
            vec![
                factory::mock_game_log_entry("LAL", 20.0),
                factory::mock_game_log_entry("LAL", 30.0),
            ],
            1,
        ),
        fixtures.create_dashboard_endpoint(1, factory::mock_dashboard(115.5), 1),
    ];
    test.mocks = mocks;

    let count = RosterSync::new(&test.db, &test.provider, fast_limiter(), TEST_SEASON)
        .run(1, "LAL")
        .await
        .unwrap();

    assert_eq!(count, 1);

    let player = PlayerRepository::new(&test.db).find_by_id(42).await?.unwrap();
    assert_eq!(player.team_id, 1);
    assert_eq!(player.full_name, "Test Player");

    let stats = PlayerStatsRepository::new(&test.db)
        .find_by_player_id(42)
        .await?
        .unwrap();
    assert_eq!(stats.games_played, 2);
    assert_eq!(stats.points_per_game, 25.0);
    assert_eq!(stats.assist_turnover_ratio, 2.0);

    let team_stats = TeamStatsRepository::new(&test.db)
        .find_by_team_id(1)
        .await?
        .unwrap();
    assert_eq!(team_stats.points_per_game, 115.5);

    test.assert_mocks();

    Ok(())
}

/// Tests that a failed game-log fetch defaults that player's averages to
/// zero instead of aborting the pass.
///
/// Expected: Ok(1), statistics row present with zero games played
#[tokio::test]
async fn defaults_stats_when_game_log_fetch_fails() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(
        entity::prelude::Team,
        entity::prelude::TeamStats,
        entity::prelude::Player,
        entity::prelude::PlayerStats,
    )?;

    let mut fixtures = test.provider_fixtures();
    let mocks = vec![
        fixtures.create_roster_endpoint(1, vec![factory::mock_roster_entry(42, "Test Player")], 1),
        fixtures.create_error_endpoint("/players/42/gamelog", 404, 1),
        fixtures.create_dashboard_endpoint(1, factory::mock_dashboard(108.0), 1),
    ];
    test.mocks = mocks;

    let count = RosterSync::new(&test.db, &test.provider, fast_limiter(), TEST_SEASON)
        .run(1, "LAL")
        .await
        .unwrap();

    assert_eq!(count, 1);

    let stats = PlayerStatsRepository::new(&test.db)
        .find_by_player_id(42)
        .await?
        .unwrap();
    assert_eq!(stats.games_played, 0);
    assert_eq!(stats.points_per_game, 0.0);

    test.assert_mocks();

    Ok(())
}

/// Tests that re-syncing a player under a new team moves them rather than
/// duplicating the row.
///
/// Expected: one player row pointing at the new team
#[tokio::test]
async fn traded_player_moves_to_new_team() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(
        entity::prelude::Team,
        entity::prelude::TeamStats,
        entity::prelude::Player,
        entity::prelude::PlayerStats,
    )?;

    let mut fixtures = test.provider_fixtures();
    let mocks = vec![
        fixtures.create_roster_endpoint(1, vec![factory::mock_roster_entry(42, "Test Player")], 1),
        fixtures.create_roster_endpoint(2, vec![factory::mock_roster_entry(42, "Test Player")], 1),
        fixtures.create_game_log_endpoint(42, vec![], 2),
        fixtures.create_dashboard_endpoint(1, factory::mock_dashboard(100.0), 1),
        fixtures.create_dashboard_endpoint(2, factory::mock_dashboard(100.0), 1),
    ];
    test.mocks = mocks;

    let sync = RosterSync::new(&test.db, &test.provider, fast_limiter(), TEST_SEASON);
    sync.run(1, "LAL").await.unwrap();
    sync.run(2, "BOS").await.unwrap();

    let player_repo = PlayerRepository::new(&test.db);
    assert!(player_repo.get_by_team_id(1).await?.is_empty());

    let players = player_repo.get_by_team_id(2).await?;
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].player_id, 42);

    test.assert_mocks();

    Ok(())
}
