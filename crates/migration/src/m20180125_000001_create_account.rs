//! Create `account` table.
//!
//! Accounts reference their owner only by `client_id`; clients live in
//! another service's database, so there is no foreign key.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Account::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Account::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(decimal_len(Account::Balance, 19, 2).not_null())
                    .col(string_len(Account::Currency, 3).not_null())
                    .col(big_integer(Account::ClientId).not_null())
                    .col(string_len(Account::Name, 255).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Account::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Account { Table, Id, Balance, Currency, ClientId, Name }
