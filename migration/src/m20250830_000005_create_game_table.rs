use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250830_000001_create_team_table::Team;

static IDX_GAME_GAME_DATE: &str = "idx_game_game_date";
static FK_GAME_HOME_TEAM_ID: &str = "fk_game_home_team_id";
static FK_GAME_VISITOR_TEAM_ID: &str = "fk_game_visitor_team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(string_len(Game::GameId, 50).primary_key())
                    .col(big_integer(Game::HomeTeamId))
                    .col(big_integer(Game::VisitorTeamId))
                    .col(date(Game::GameDate))
                    .col(integer(Game::StatusId))
                    .col(string_len(Game::StatusText, 100))
                    .col(integer_null(Game::HomeTeamScore))
                    .col(integer_null(Game::VisitorTeamScore))
                    .col(timestamp(Game::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GAME_GAME_DATE)
                    .table(Game::Table)
                    .col(Game::GameDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_GAME_HOME_TEAM_ID)
                    .from_tbl(Game::Table)
                    .from_col(Game::HomeTeamId)
                    .to_tbl(Team::Table)
                    .to_col(Team::TeamId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_GAME_VISITOR_TEAM_ID)
                    .from_tbl(Game::Table)
                    .from_col(Game::VisitorTeamId)
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
                    .name(FK_GAME_VISITOR_TEAM_ID)
                    .table(Game::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_GAME_HOME_TEAM_ID)
                    .table(Game::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GAME_GAME_DATE)
                    .table(Game::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Game::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Game {
    Table,
    GameId,
    HomeTeamId,
    VisitorTeamId,
    GameDate,
    StatusId,
    StatusText,
    HomeTeamScore,
    VisitorTeamScore,
    UpdatedAt,
}
