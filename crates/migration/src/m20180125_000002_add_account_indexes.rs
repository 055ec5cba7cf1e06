use sea_orm_migration::prelude::*;

use crate::m20180125_000001_create_account::Account;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Account: lookups and bulk deletes go by owner
        manager
            .create_index(
                Index::create()
                    .name("idx_account_client_id")
                    .table(Account::Table)
                    .col(Account::ClientId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_account_client_id").table(Account::Table).to_owned())
            .await
    }
}
