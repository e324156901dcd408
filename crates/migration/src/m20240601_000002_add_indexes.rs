use sea_orm_migration::prelude::*;

use crate::m20240601_000001_create_jersey::Jersey;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Jersey: listing is always newest first
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_jersey_created_at")
                    .table(Jersey::Table)
                    .col(Jersey::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_jersey_created_at").table(Jersey::Table).to_owned())
            .await
    }
}
