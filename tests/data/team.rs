//! Tests for TeamRepository upsert and query behavior.

use fastbreak::data::team::TeamRepository;
use fastbreak::provider::model::TeamRecord;
use fastbreak_test_utils::prelude::*;

/// Tests that reconciling a team twice updates the existing row in place.
///
/// Expected: one row per team ID with the latest directory fields
#[tokio::test]
async fn upsert_updates_existing_team_in_place() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Team)?;
    let repo = TeamRepository::new(&test.db);

    repo.upsert_many(vec![factory::mock_team(1_610_612_747, "LAL")])
        .await?;

    let renamed = TeamRecord {
        full_name: "Los Angeles Lakers".to_string(),
        ..factory::mock_team(1_610_612_747, "LAL")
    };
    repo.upsert_many(vec![renamed]).await?;

    let teams = repo.get_all().await?;
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].team_id, 1_610_612_747);
    assert_eq!(teams[0].full_name, "Los Angeles Lakers");

    Ok(())
}

/// Tests that a directory upsert never overwrites a conference tag set by
/// the standings pass.
///
/// Expected: conference stays "West" through a second directory upsert
#[tokio::test]
async fn upsert_preserves_conference_on_update() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Team)?;
    let repo = TeamRepository::new(&test.db);

    repo.upsert_many(vec![factory::mock_team(1_610_612_747, "LAL")])
        .await?;

    let team = repo.find_by_id(1_610_612_747).await?.unwrap();
    assert_eq!(team.conference, "Unknown");

    repo.update_conferences(vec![(1_610_612_747, "West".to_string())])
        .await?;
    repo.upsert_many(vec![factory::mock_team(1_610_612_747, "LAL")])
        .await?;

    let team = repo.find_by_id(1_610_612_747).await?.unwrap();
    assert_eq!(team.conference, "West");

    Ok(())
}

/// Tests that update_conferences silently skips team IDs that are not
/// persisted.
///
/// Expected: Ok, known team updated, unknown ID ignored
#[tokio::test]
async fn update_conferences_skips_unknown_teams() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Team)?;
    let repo = TeamRepository::new(&test.db);

    repo.upsert_many(vec![factory::mock_team(1_610_612_738, "BOS")])
        .await?;

    repo.update_conferences(vec![
        (1_610_612_738, "East".to_string()),
        (999, "West".to_string()),
    ])
    .await?;

    let teams = repo.get_all().await?;
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].conference, "East");

    Ok(())
}

/// Tests the left-join listing of teams with their statistics.
///
/// Expected: both teams returned, the one without a statistics row paired
/// with None
#[tokio::test]
async fn get_all_with_stats_keeps_teams_without_stats() -> Result<(), TestError> {
    use fastbreak::data::team_stats::TeamStatsRepository;

    let test = test_setup_with_tables!(entity::prelude::Team, entity::prelude::TeamStats)?;
    let repo = TeamRepository::new(&test.db);

    repo.upsert_many(vec![
        factory::mock_team(1, "LAL"),
        factory::mock_team(2, "BOS"),
    ])
    .await?;

    TeamStatsRepository::new(&test.db)
        .upsert_standings(vec![factory::mock_standing(1, "West", 3)])
        .await?;

    let mut rows = repo.get_all_with_stats().await?;
    rows.sort_by_key(|(team, _)| team.team_id);

    assert_eq!(rows.len(), 2);
    assert!(rows[0].1.is_some());
    assert!(rows[1].1.is_none());

    Ok(())
}
