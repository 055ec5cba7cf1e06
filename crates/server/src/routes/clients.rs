use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use service::client::Client;

use crate::{errors::ApiError, state::ClientsState};

type Body = Result<Json<Option<Client>>, JsonRejection>;
type IdPath = Result<Path<i64>, PathRejection>;

#[utoipa::path(
    get, path = "/client", tag = "clients",
    responses((status = 200, description = "All clients, without accounts", body = [crate::openapi::ClientDoc]))
)]
pub async fn get_all(State(state): State<ClientsState>) -> Result<Json<Vec<Client>>, ApiError> {
    Ok(Json(state.clients.get_all().await?))
}

#[utoipa::path(
    get, path = "/client/{id}", tag = "clients",
    params(("id" = i64, Path, description = "Client id")),
    responses(
        (status = 200, description = "Client with accounts", body = crate::openapi::ClientDoc),
        (status = 204, description = "No such client"),
        (status = 502, description = "Accounts service failed", body = crate::openapi::ApiErrorDoc)
    )
)]
pub async fn find_one(State(state): State<ClientsState>, id: IdPath) -> Result<Response, ApiError> {
    let Path(id) = id?;
    Ok(match state.clients.find_one(id).await? {
        Some(client) => Json(client).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

#[utoipa::path(
    post, path = "/client", tag = "clients",
    request_body = crate::openapi::ClientDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ClientDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ApiErrorDoc),
        (status = 502, description = "Accounts service failed", body = crate::openapi::ApiErrorDoc)
    )
)]
pub async fn create(State(state): State<ClientsState>, body: Body) -> Result<(StatusCode, Json<Client>), ApiError> {
    let Json(client) = body?;
    let saved = state.clients.create(client).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

#[utoipa::path(
    put, path = "/client", tag = "clients",
    request_body = crate::openapi::ClientDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ClientDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ApiErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ApiErrorDoc)
    )
)]
pub async fn update(State(state): State<ClientsState>, body: Body) -> Result<Json<Client>, ApiError> {
    let Json(client) = body?;
    Ok(Json(state.clients.update(client).await?))
}

#[utoipa::path(
    delete, path = "/client/{id}", tag = "clients",
    params(("id" = i64, Path, description = "Client id")),
    responses(
        (status = 200, description = "Deleted with its accounts"),
        (status = 404, description = "Not Found", body = crate::openapi::ApiErrorDoc)
    )
)]
pub async fn delete_one(State(state): State<ClientsState>, id: IdPath) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state.clients.delete(id).await?;
    Ok(StatusCode::OK)
}
