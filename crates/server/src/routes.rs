use std::time::Instant;

use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::{metrics, types::Health};

use crate::openapi::{AccountsApiDoc, ClientsApiDoc};
use crate::state::{AccountsState, ClientsState};

pub mod accounts;
pub mod clients;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn metrics_text() -> impl IntoResponse {
    metrics::encode_metrics()
}

async fn track_metrics(State(service): State<&'static str>, req: Request, next: Next) -> Response {
    let method = req.method().to_string();
    let start = Instant::now();
    let resp = next.run(req).await;
    metrics::record_http(service, &method, resp.status().as_u16(), start.elapsed().as_secs_f64());
    resp
}

/// Health, metrics and docs routes plus the layers both services share.
fn finish(api: Router, service: &'static str, doc: utoipa::openapi::OpenApi) -> Router {
    api.route("/health", get(health))
        .route("/metrics", get(metrics_text))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", doc))
        .layer(middleware::from_fn_with_state(service, track_metrics))
        .layer(CorsLayer::very_permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx and handler failures
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

/// Router of the accounts service.
pub fn build_accounts_router(state: AccountsState) -> Router {
    let api = Router::new()
        .route("/accounts", get(accounts::get_all).post(accounts::create))
        .route(
            "/accounts/:id",
            get(accounts::get_one).put(accounts::update).delete(accounts::delete_one),
        )
        .route("/accounts/ClientId/:client_id", get(accounts::find_by_client_id))
        .route("/accounts/list", post(accounts::create_list).delete(accounts::delete_list))
        .route("/accounts/list/client/:client_id", put(accounts::update_all_of_client))
        .route("/accounts/clientId/:client_id", delete(accounts::delete_all_of_client))
        .with_state(state);
    finish(api, "accounts", AccountsApiDoc::openapi())
}

/// Router of the clients service.
pub fn build_clients_router(state: ClientsState) -> Router {
    let api = Router::new()
        .route("/client", get(clients::get_all).post(clients::create).put(clients::update))
        .route("/client/:id", get(clients::find_one).delete(clients::delete_one))
        .with_state(state);
    finish(api, "clients", ClientsApiDoc::openapi())
}
