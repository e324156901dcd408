//! Create `jersey` table.
//!
//! One row per catalog item; timestamps are written by the store, never by clients.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Jersey::Table)
                    .if_not_exists()
                    .col(uuid(Jersey::Id).primary_key())
                    .col(string_len(Jersey::Team, 255).not_null())
                    .col(string_len(Jersey::Country, 255).not_null())
                    .col(double(Jersey::Price).not_null())
                    .col(string_len(Jersey::ImageUrl, 2048).not_null())
                    .col(timestamp_with_time_zone(Jersey::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Jersey::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Jersey::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Jersey { Table, Id, Team, Country, Price, ImageUrl, CreatedAt, UpdatedAt }
