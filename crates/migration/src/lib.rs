//! Schema migrations for both services.
//!
//! Each service owns its database, so each gets its own migrator. The two
//! migrators also keep separate bookkeeping tables, which lets a single
//! development database host both schemas.
pub use sea_orm_migration::prelude::*;

mod m20180125_000001_create_account;
mod m20180125_000002_add_account_indexes;
mod m20180125_000011_create_client;

/// Migrator for the accounts service database.
pub struct AccountsMigrator;

#[async_trait::async_trait]
impl MigratorTrait for AccountsMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20180125_000001_create_account::Migration),
            // Indexes should always be applied last
            Box::new(m20180125_000002_add_account_indexes::Migration),
        ]
    }

    fn migration_table_name() -> DynIden {
        Alias::new("seaql_migrations_accounts").into_iden()
    }
}

/// Migrator for the clients service database.
pub struct ClientsMigrator;

#[async_trait::async_trait]
impl MigratorTrait for ClientsMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20180125_000011_create_client::Migration)]
    }

    fn migration_table_name() -> DynIden {
        Alias::new("seaql_migrations_clients").into_iden()
    }
}
