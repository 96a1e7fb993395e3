use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250830_000001_create_team_table::Team;

static FK_TEAM_STATS_TEAM_ID: &str = "fk_team_stats_team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamStats::Table)
                    .if_not_exists()
                    .col(big_integer(TeamStats::TeamId).primary_key())
                    .col(integer(TeamStats::Wins).default(0))
                    .col(integer(TeamStats::Losses).default(0))
                    .col(double(TeamStats::WinPct).default(0))
                    .col(integer(TeamStats::ConferenceRank).default(0))
                    .col(double(TeamStats::PointsPerGame).default(0))
                    .col(double(TeamStats::ReboundsPerGame).default(0))
                    .col(double(TeamStats::AssistsPerGame).default(0))
                    .col(timestamp(TeamStats::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEAM_STATS_TEAM_ID)
                    .from_tbl(TeamStats::Table)
                    .from_col(TeamStats::TeamId)
                    .to_tbl(Team::Table)
                    .to_col(Team::TeamId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TEAM_STATS_TEAM_ID)
                    .table(TeamStats::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TeamStats::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TeamStats {
    Table,
    TeamId,
    Wins,
    Losses,
    WinPct,
    ConferenceRank,
    PointsPerGame,
    ReboundsPerGame,
    AssistsPerGame,
    UpdatedAt,
}
