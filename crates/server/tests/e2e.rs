//! Both services wired together: the clients service reaches a live
//! accounts service through the REST client.

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use reqwest::StatusCode;
use serde_json::{json, Value};
use server::routes::{build_accounts_router, build_clients_router};
use server::state::{AccountsState, ClientsState};
use service::account::repository::mock::MockAccountRepository;
use service::client::repository::mock::MockClientRepository;
use service::mks::RestAccountsMks;
use tokio::net::TcpListener;

async fn spawn(app: Router) -> anyhow::Result<SocketAddr> {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });
    Ok(addr)
}

struct Services {
    clients_url: String,
    accounts: Arc<MockAccountRepository>,
}

async fn start() -> anyhow::Result<Services> {
    let accounts = Arc::new(MockAccountRepository::default());
    let accounts_addr = spawn(build_accounts_router(AccountsState::new(accounts.clone()))).await?;

    let mks = RestAccountsMks::new(format!("http://{}", accounts_addr), Duration::from_secs(5))?;
    let state = ClientsState::new(Arc::new(MockClientRepository::default()), Arc::new(mks));
    let clients_addr = spawn(build_clients_router(state)).await?;
    Ok(Services { clients_url: format!("http://{}", clients_addr), accounts })
}

#[tokio::test]
async fn client_lifecycle_drives_the_accounts_service() -> anyhow::Result<()> {
    let s = start().await?;
    let c = reqwest::Client::new();

    let res = c
        .post(format!("{}/client", s.clients_url))
        .json(&json!({
            "name": "Olga", "surname": "Ivanova",
            "accounts": [
                {"balance": 123.12, "currency": "RUB", "name": "Acc1"},
                {"balance": 465657.86, "currency": "USD", "name": "Acc2"}
            ]
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = res.json().await?;
    let id = created["id"].as_i64().expect("id");
    assert_eq!(s.accounts.len(), 2);

    let found: Value = c.get(format!("{}/client/{}", s.clients_url, id)).send().await?.json().await?;
    let accounts = found["accounts"].as_array().cloned().unwrap_or_default();
    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[1]["balance"].to_string(), "465657.86");

    let res = c
        .put(format!("{}/client", s.clients_url))
        .json(&json!({"id": id, "name": "Olga", "surname": "Ivanova", "accounts": [accounts[0]]}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(s.accounts.len(), 1);

    let res = c.delete(format!("{}/client/{}", s.clients_url, id)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(s.accounts.is_empty());
    Ok(())
}

#[tokio::test]
async fn rejected_accounts_surface_as_bad_mks_request() -> anyhow::Result<()> {
    let s = start().await?;

    // accounts carrying an id are refused by the accounts service
    let res = reqwest::Client::new()
        .post(format!("{}/client", s.clients_url))
        .json(&json!({"name": "Olga", "surname": "Ivanova",
                      "accounts": [{"id": 5345, "balance": 1.0, "currency": "RUB", "name": "Acc1"}]}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    let err: Value = res.json().await?;
    assert_eq!(err["errType"], "bad_mks_request");
    let message = err["message"].as_str().unwrap_or_default();
    assert!(message.starts_with("Mks Accounts Error, url"));
    assert!(message.contains("validation"));

    let all: Vec<Value> = reqwest::get(format!("{}/client", s.clients_url)).await?.json().await?;
    assert!(all.is_empty());
    Ok(())
}

#[tokio::test]
async fn large_balances_cross_both_services_unchanged() -> anyhow::Result<()> {
    let s = start().await?;
    let c = reqwest::Client::new();

    let res = c
        .post(format!("{}/client", s.clients_url))
        .header("content-type", "application/json")
        .body(r#"{"name":"Olga","surname":"Ivanova","accounts":[{"balance":12345678901234567.89,"currency":"RUB","name":"Big"}]}"#)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = res.json().await?;
    let id = created["id"].as_i64().expect("id");

    let text = c.get(format!("{}/client/{}", s.clients_url, id)).send().await?.text().await?;
    assert!(text.contains(r#""balance":12345678901234567.89"#), "{}", text);
    Ok(())
}
