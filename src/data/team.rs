use chrono::Utc;
use migration::{CaseStatement, Expr, OnConflict};
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::provider::model::TeamRecord;

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts or updates teams by provider team ID.
    ///
    /// The conference column is only written on insert (defaulting to
    /// "Unknown"); the standings pass owns it afterwards since the team
    /// directory payload does not carry it.
    pub async fn upsert_many(
        &self,
        teams: Vec<TeamRecord>,
    ) -> Result<Vec<entity::team::Model>, DbErr> {
        if teams.is_empty() {
            return Ok(Vec::new());
        }

        let teams = teams.into_iter().map(|team| entity::team::ActiveModel {
            team_id: ActiveValue::Set(team.team_id),
            abbreviation: ActiveValue::Set(team.abbreviation),
            full_name: ActiveValue::Set(team.full_name),
            city: ActiveValue::Set(team.city),
            nickname: ActiveValue::Set(team.nickname),
            conference: ActiveValue::Set("Unknown".to_string()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        });

        entity::prelude::Team::insert_many(teams)
            .on_conflict(
                OnConflict::column(entity::team::Column::TeamId)
                    .update_columns([
                        entity::team::Column::Abbreviation,
                        entity::team::Column::FullName,
                        entity::team::Column::City,
                        entity::team::Column::Nickname,
                        entity::team::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::team::Model>, DbErr> {
        entity::prelude::Team::find().all(self.db).await
    }

    pub async fn find_by_id(&self, team_id: i64) -> Result<Option<entity::team::Model>, DbErr> {
        entity::prelude::Team::find_by_id(team_id).one(self.db).await
    }

    /// All teams with their statistics, left-join semantics: teams that have
    /// never appeared in a standings pass are kept with a `None` stats side.
    pub async fn get_all_with_stats(
        &self,
    ) -> Result<Vec<(entity::team::Model, Option<entity::team_stats::Model>)>, DbErr> {
        entity::prelude::Team::find()
            .find_also_related(entity::prelude::TeamStats)
            .all(self.db)
            .await
    }

    /// Writes conference tags for a batch of teams.
    ///
    /// Teams that don't exist are silently skipped. Pass a transaction as the
    /// connection for transactional behavior.
    pub async fn update_conferences(&self, teams: Vec<(i64, String)>) -> Result<(), DbErr> {
        if teams.is_empty() {
            return Ok(());
        }

        const BATCH_SIZE: usize = 100;

        for batch in teams.chunks(BATCH_SIZE) {
            let mut case_stmt = CaseStatement::new();
            let team_ids: Vec<i64> = batch.iter().map(|(id, _)| *id).collect();

            for (team_id, conference) in batch {
                case_stmt = case_stmt.case(
                    entity::team::Column::TeamId.eq(*team_id),
                    Expr::value(conference.clone()),
                );
            }

            entity::prelude::Team::update_many()
                .col_expr(entity::team::Column::Conference, Expr::value(case_stmt))
                .col_expr(
                    entity::team::Column::UpdatedAt,
                    Expr::value(Utc::now().naive_utc()),
                )
                .filter(entity::team::Column::TeamId.is_in(team_ids))
                .exec(self.db)
                .await?;
        }

        Ok(())
    }
}
