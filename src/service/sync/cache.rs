use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DbErr};

use crate::data::team::TeamRepository;

/// Read-through lookup cache over the locally persisted teams.
///
/// Owned by one orchestration run and rebuilt on demand; never held as
/// ambient global state. Reconcilers use it to resolve foreign team
/// references (standings rows, scoreboard games) and to find the matchup
/// abbreviation for game-log filtering without re-querying per record.
#[derive(Clone, Debug, Default)]
pub struct SyncCache {
    team_abbreviations: HashMap<i64, String>,
    teams_loaded: bool,
}

impl SyncCache {
    /// Loads the team lookup map on first use. Passes that must see teams
    /// inserted earlier in the same orchestration start from a fresh cache.
    pub async fn ensure_loaded<C: ConnectionTrait>(&mut self, db: &C) -> Result<(), DbErr> {
        if self.teams_loaded {
            return Ok(());
        }

        let teams = TeamRepository::new(db).get_all().await?;
        self.team_abbreviations = teams
            .into_iter()
            .map(|team| (team.team_id, team.abbreviation))
            .collect();
        self.teams_loaded = true;

        Ok(())
    }

    pub fn contains_team(&self, team_id: i64) -> bool {
        self.team_abbreviations.contains_key(&team_id)
    }

    pub fn team_abbreviation(&self, team_id: i64) -> Option<&str> {
        self.team_abbreviations.get(&team_id).map(String::as_str)
    }

    pub fn team_ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.team_abbreviations.keys().copied()
    }
}
