use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

// Tests run in parallel; only the first one migrates
static MIGRATED: OnceCell<()> = OnceCell::const_new();


/// CRUD round trips for the account and client entities
pub mod crud_tests;

/// Connect and migrate both schemas, or `None` when no database is available.
pub(crate) async fn db_or_skip() -> Option<DatabaseConnection> {
    use migration::MigratorTrait;

    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        eprintln!("skip: DATABASE_URL not set (or SKIP_DB_TESTS set)");
        return None;
    }
    let db = match crate::db::connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return None;
        }
    };
    MIGRATED
        .get_or_init(|| async {
            migration::AccountsMigrator::up(&db, None).await.expect("migrate accounts schema");
            migration::ClientsMigrator::up(&db, None).await.expect("migrate clients schema");
        })
        .await;
    Some(db)
}
