use std::{sync::Arc, time::Duration};

use axum::Router;
use common::utils::logging::init_logging_from_env;
use configs::{AppConfig, ServerConfig, ServiceConfig, ServiceKind};
use dotenvy::dotenv;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::{AccountsState, ClientsState};
use service::{
    account::repo::SeaOrmAccountRepository,
    client::repo::SeaOrmClientRepository,
    mks::RestAccountsMks,
};

fn load_config(kind: ServiceKind) -> Result<AppConfig, StartupError> {
    AppConfig::load_and_validate(kind).map_err(|e| StartupError::InvalidConfig(e.to_string()))
}

async fn connect(kind: ServiceKind, svc: &ServiceConfig) -> Result<DatabaseConnection, StartupError> {
    let db = models::db::connect_with_config(&svc.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    models::db::ping(&db)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    info!(service = kind.name(), "database connected");
    Ok(db)
}

async fn serve(app: Router, server: &ServerConfig, kind: ServiceKind) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind((server.host.as_str(), server.port)).await?;
    let addr = listener.local_addr()?;
    info!(service = kind.name(), %addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Run the accounts service until the listener fails.
pub async fn run_accounts() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_from_env();

    let kind = ServiceKind::Accounts;
    let cfg = load_config(kind)?;
    let svc = cfg.service(kind);
    let db = connect(kind, svc).await?;
    if svc.database.auto_migrate {
        migration::AccountsMigrator::up(&db, None).await?;
        info!(service = kind.name(), "migrations applied");
    }

    let state = AccountsState::new(Arc::new(SeaOrmAccountRepository { db }));
    serve(routes::build_accounts_router(state), &svc.server, kind).await
}

/// Run the clients service; accounts are reached at `mks.accounts_url`.
pub async fn run_clients() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_from_env();

    let kind = ServiceKind::Clients;
    let cfg = load_config(kind)?;
    let svc = cfg.service(kind);
    let db = connect(kind, svc).await?;
    if svc.database.auto_migrate {
        migration::ClientsMigrator::up(&db, None).await?;
        info!(service = kind.name(), "migrations applied");
    }

    let mks = RestAccountsMks::new(&cfg.mks.accounts_url, Duration::from_secs(cfg.mks.timeout_secs))?;
    info!(accounts_url = %mks.base_url(), timeout_secs = cfg.mks.timeout_secs, "accounts service client ready");

    let state = ClientsState::new(Arc::new(SeaOrmClientRepository { db }), Arc::new(mks));
    serve(routes::build_clients_router(state), &svc.server, kind).await
}
