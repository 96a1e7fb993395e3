use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250830_000003_create_player_table::Player;

static FK_PLAYER_STATS_PLAYER_ID: &str = "fk_player_stats_player_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerStats::Table)
                    .if_not_exists()
                    .col(big_integer(PlayerStats::PlayerId).primary_key())
                    .col(integer(PlayerStats::GamesPlayed).default(0))
                    .col(double(PlayerStats::MinutesPerGame).default(0))
                    .col(double(PlayerStats::PointsPerGame).default(0))
                    .col(double(PlayerStats::OffReboundsPerGame).default(0))
                    .col(double(PlayerStats::DefReboundsPerGame).default(0))
                    .col(double(PlayerStats::ReboundsPerGame).default(0))
                    .col(double(PlayerStats::AssistsPerGame).default(0))
                    .col(double(PlayerStats::StealsPerGame).default(0))
                    .col(double(PlayerStats::BlocksPerGame).default(0))
                    .col(double(PlayerStats::TurnoversPerGame).default(0))
                    .col(double(PlayerStats::FoulsPerGame).default(0))
                    .col(double(PlayerStats::AssistTurnoverRatio).default(0))
                    .col(timestamp(PlayerStats::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PLAYER_STATS_PLAYER_ID)
                    .from_tbl(PlayerStats::Table)
                    .from_col(PlayerStats::PlayerId)
                    .to_tbl(Player::Table)
                    .to_col(Player::PlayerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PLAYER_STATS_PLAYER_ID)
                    .table(PlayerStats::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PlayerStats::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PlayerStats {
    Table,
    PlayerId,
    GamesPlayed,
    MinutesPerGame,
    PointsPerGame,
    OffReboundsPerGame,
    DefReboundsPerGame,
    ReboundsPerGame,
    AssistsPerGame,
    StealsPerGame,
    BlocksPerGame,
    TurnoversPerGame,
    FoulsPerGame,
    AssistTurnoverRatio,
    UpdatedAt,
}
