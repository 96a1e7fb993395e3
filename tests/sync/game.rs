//! Tests for GameSync reconciliation of a date's scoreboard.

use chrono::NaiveDate;
use fastbreak::data::{game::GameRepository, team::TeamRepository};
use fastbreak::service::sync::{game::GameSync, SyncCache};
use fastbreak_test_utils::prelude::*;

use crate::sync::fast_limiter;

fn game_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
}

/// Tests that scoreboard games are persisted with line scores joined on.
///
/// Expected: Ok(1) with both team scores attached to the game row
#[tokio::test]
async fn syncs_scoreboard_with_scores() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Team, entity::prelude::Game)?;

    TeamRepository::new(&test.db)
        .upsert_many(vec![
            factory::mock_team(1, "LAL"),
            factory::mock_team(2, "BOS"),
        ])
        .await?;

    let mock = test
        .provider_fixtures()
        .create_scoreboard_endpoint(factory::mock_scoreboard("0022400501", 1, 2), 1);
    test.mocks.push(mock);

    let mut cache = SyncCache::default();
    let count = GameSync::new(&test.db, &test.provider, fast_limiter())
        .run(game_date(), &mut cache)
        .await
        .unwrap();

    assert_eq!(count, 1);

    let games = GameRepository::new(&test.db).get_by_date(game_date()).await?;
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].game_id, "0022400501");
    assert_eq!(games[0].home_team_score, Some(112));
    assert_eq!(games[0].visitor_team_score, Some(104));
    assert_eq!(games[0].status_id, 3);

    test.assert_mocks();

    Ok(())
}

/// Tests that a scheduled game with no line scores yet persists with null
/// scores.
///
/// Expected: Ok(1) with both scores None
#[tokio::test]
async fn scheduled_game_has_no_scores() -> Result<(), TestError> {
    use fastbreak::provider::model::{GameHeader, Scoreboard};

    let mut test = test_setup_with_tables!(entity::prelude::Team, entity::prelude::Game)?;

    TeamRepository::new(&test.db)
        .upsert_many(vec![
            factory::mock_team(1, "LAL"),
            factory::mock_team(2, "BOS"),
        ])
        .await?;

    let scoreboard = Scoreboard {
        games: vec![GameHeader {
            status_id: 1,
            status_text: "7:00 pm ET".to_string(),
            ..factory::mock_game_header("0022400502", 1, 2)
        }],
        line_scores: vec![],
    };

    let mock = test
        .provider_fixtures()
        .create_scoreboard_endpoint(scoreboard, 1);
    test.mocks.push(mock);

    let mut cache = SyncCache::default();
    GameSync::new(&test.db, &test.provider, fast_limiter())
        .run(game_date(), &mut cache)
        .await
        .unwrap();

    let games = GameRepository::new(&test.db).get_by_date(game_date()).await?;
    assert_eq!(games[0].home_team_score, None);
    assert_eq!(games[0].visitor_team_score, None);

    test.assert_mocks();

    Ok(())
}

/// Tests that games referencing teams the directory has never seen are
/// skipped while the rest commit.
///
/// Expected: Ok(1), only the known-team game persisted
#[tokio::test]
async fn skips_games_with_unknown_teams() -> Result<(), TestError> {
    use fastbreak::provider::model::Scoreboard;

    let mut test = test_setup_with_tables!(entity::prelude::Team, entity::prelude::Game)?;

    TeamRepository::new(&test.db)
        .upsert_many(vec![
            factory::mock_team(1, "LAL"),
            factory::mock_team(2, "BOS"),
        ])
        .await?;

    let scoreboard = Scoreboard {
        games: vec![
            factory::mock_game_header("0022400503", 1, 2),
            factory::mock_game_header("0022400504", 1, 777),
        ],
        line_scores: vec![],
    };

    let mock = test
        .provider_fixtures()
        .create_scoreboard_endpoint(scoreboard, 1);
    test.mocks.push(mock);

    let mut cache = SyncCache::default();
    let count = GameSync::new(&test.db, &test.provider, fast_limiter())
        .run(game_date(), &mut cache)
        .await
        .unwrap();

    assert_eq!(count, 1);

    let games = GameRepository::new(&test.db).get_by_date(game_date()).await?;
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].game_id, "0022400503");

    test.assert_mocks();

    Ok(())
}
