//! Tests for StandingsSync reconciliation into team statistics.

use fastbreak::data::{team::TeamRepository, team_stats::TeamStatsRepository};
use fastbreak::service::sync::{standings::StandingsSync, SyncCache};
use fastbreak_test_utils::constant::TEST_SEASON;
use fastbreak_test_utils::prelude::*;

use crate::sync::fast_limiter;

/// Tests that standings rows for persisted teams are written and their
/// conference tags set.
///
/// Expected: Ok(2), statistics rows for both teams, conferences updated
#[tokio::test]
async fn syncs_standings_for_known_teams() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Team, entity::prelude::TeamStats)?;

    TeamRepository::new(&test.db)
        .upsert_many(vec![
            factory::mock_team(1, "LAL"),
            factory::mock_team(2, "BOS"),
        ])
        .await?;

    let mock = test.provider_fixtures().create_standings_endpoint(
        vec![
            factory::mock_standing(1, "West", 4),
            factory::mock_standing(2, "East", 1),
        ],
        1,
    );
    test.mocks.push(mock);

    let mut cache = SyncCache::default();
    let count = StandingsSync::new(&test.db, &test.provider, fast_limiter(), TEST_SEASON)
        .run(&mut cache)
        .await
        .unwrap();

    assert_eq!(count, 2);

    let stats = TeamStatsRepository::new(&test.db).find_by_team_id(2).await?;
    assert_eq!(stats.unwrap().conference_rank, 1);

    let team = TeamRepository::new(&test.db).find_by_id(1).await?.unwrap();
    assert_eq!(team.conference, "West");

    test.assert_mocks();

    Ok(())
}

/// Tests that a standings row for a team the directory has never seen is
/// skipped while the rest of the batch still commits.
///
/// Expected: Ok(1), no statistics row for the unknown team
#[tokio::test]
async fn skips_rows_for_unknown_teams() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Team, entity::prelude::TeamStats)?;

    TeamRepository::new(&test.db)
        .upsert_many(vec![factory::mock_team(1, "LAL")])
        .await?;

    let mock = test.provider_fixtures().create_standings_endpoint(
        vec![
            factory::mock_standing(1, "West", 4),
            factory::mock_standing(999, "East", 1),
        ],
        1,
    );
    test.mocks.push(mock);

    let mut cache = SyncCache::default();
    let count = StandingsSync::new(&test.db, &test.provider, fast_limiter(), TEST_SEASON)
        .run(&mut cache)
        .await
        .unwrap();

    assert_eq!(count, 1);

    let repo = TeamStatsRepository::new(&test.db);
    assert!(repo.find_by_team_id(1).await?.is_some());
    assert!(repo.find_by_team_id(999).await?.is_none());

    test.assert_mocks();

    Ok(())
}
