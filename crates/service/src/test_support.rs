#![cfg(test)]
use migration::MigratorTrait;
use models::db::connect_with_config;
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

fn test_db_config() -> Option<configs::DatabaseConfig> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let url = std::env::var("DATABASE_URL").ok()?;
    Some(configs::DatabaseConfig {
        url,
        max_connections: 10,
        min_connections: 1,
        acquire_timeout_secs: 10,
        ..configs::DatabaseConfig::default()
    })
}

/// A migrated database connection, or `None` when `DATABASE_URL` is not
/// configured (database tests then pass vacuously).
pub async fn get_db() -> Result<Option<DatabaseConnection>, anyhow::Error> {
    let Some(cfg) = test_db_config() else {
        eprintln!("skip: DATABASE_URL not set (or SKIP_DB_TESTS set)");
        return Ok(None);
    };

    // Run migrations exactly once, with a throwaway connection
    let migrated = MIGRATED
        .get_or_init(|| async {
            let Ok(db) = connect_with_config(&cfg).await else { return false };
            let ok = migration::AccountsMigrator::up(&db, None).await.is_ok()
                && migration::ClientsMigrator::up(&db, None).await.is_ok();
            drop(db);
            ok
        })
        .await;
    if !*migrated {
        anyhow::bail!("database configured but migrations failed");
    }

    // Return a fresh connection for the current test's runtime
    let db = connect_with_config(&cfg).await?;
    Ok(Some(db))
}
