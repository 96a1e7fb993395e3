use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(big_integer(Team::TeamId).primary_key())
                    .col(string_len(Team::Abbreviation, 10))
                    .col(string(Team::FullName))
                    .col(string(Team::City))
                    .col(string(Team::Nickname))
                    .col(string_len(Team::Conference, 20).default("Unknown"))
                    .col(timestamp(Team::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Team {
    Table,
    TeamId,
    Abbreviation,
    FullName,
    City,
    Nickname,
    Conference,
    UpdatedAt,
}
