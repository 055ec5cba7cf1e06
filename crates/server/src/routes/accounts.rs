use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use service::account::Account;
use tracing::info;

use crate::{errors::ApiError, state::AccountsState};

type Body<T> = Result<Json<Option<T>>, JsonRejection>;
type IdPath = Result<Path<i64>, PathRejection>;
type ListBody = Body<Vec<Option<Account>>>;

#[utoipa::path(
    get, path = "/accounts", tag = "accounts",
    responses((status = 200, description = "All accounts", body = [crate::openapi::AccountDoc]))
)]
pub async fn get_all(State(state): State<AccountsState>) -> Result<Json<Vec<Account>>, ApiError> {
    Ok(Json(state.accounts.get_all().await?))
}

#[utoipa::path(
    get, path = "/accounts/{id}", tag = "accounts",
    params(("id" = i64, Path, description = "Account id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::AccountDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ApiErrorDoc)
    )
)]
pub async fn get_one(State(state): State<AccountsState>, id: IdPath) -> Result<Json<Account>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.accounts.get(id).await?))
}

#[utoipa::path(
    get, path = "/accounts/ClientId/{client_id}", tag = "accounts",
    params(("client_id" = i64, Path, description = "Client id")),
    responses((status = 200, description = "Accounts of the client", body = [crate::openapi::AccountDoc]))
)]
pub async fn find_by_client_id(
    State(state): State<AccountsState>,
    client_id: IdPath,
) -> Result<Json<Vec<Account>>, ApiError> {
    let Path(client_id) = client_id?;
    Ok(Json(state.accounts.find_by_client_id(client_id).await?))
}

#[utoipa::path(
    post, path = "/accounts", tag = "accounts",
    request_body = crate::openapi::AccountDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::AccountDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ApiErrorDoc)
    )
)]
pub async fn create(State(state): State<AccountsState>, body: Body<Account>) -> Result<Json<Account>, ApiError> {
    let Json(account) = body?;
    Ok(Json(state.accounts.create(account).await?))
}

#[utoipa::path(
    post, path = "/accounts/list", tag = "accounts",
    request_body = [crate::openapi::AccountDoc],
    responses(
        (status = 200, description = "Created", body = [crate::openapi::AccountDoc]),
        (status = 400, description = "Validation Error", body = crate::openapi::ApiErrorDoc)
    )
)]
pub async fn create_list(State(state): State<AccountsState>, body: ListBody) -> Result<Json<Vec<Account>>, ApiError> {
    let Json(accounts) = body?;
    Ok(Json(state.accounts.create_many(accounts).await?))
}

/// The id in the path wins over any id in the body.
#[utoipa::path(
    put, path = "/accounts/{id}", tag = "accounts",
    params(("id" = i64, Path, description = "Account id")),
    request_body = crate::openapi::AccountDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::AccountDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ApiErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ApiErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AccountsState>,
    id: IdPath,
    body: Body<Account>,
) -> Result<Json<Account>, ApiError> {
    let Path(id) = id?;
    let Json(account) = body?;
    let account = account.map(|a| a.with_id(id));
    Ok(Json(state.accounts.update(account).await?))
}

#[utoipa::path(
    put, path = "/accounts/list/client/{client_id}", tag = "accounts",
    params(("client_id" = i64, Path, description = "Client id")),
    request_body = [crate::openapi::AccountDoc],
    responses(
        (status = 200, description = "Account set replaced", body = [crate::openapi::AccountDoc]),
        (status = 400, description = "Validation Error", body = crate::openapi::ApiErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ApiErrorDoc)
    )
)]
pub async fn update_all_of_client(
    State(state): State<AccountsState>,
    client_id: IdPath,
    body: ListBody,
) -> Result<Json<Vec<Account>>, ApiError> {
    let Path(client_id) = client_id?;
    let Json(accounts) = body?;
    Ok(Json(state.accounts.update_all_of_client(accounts, client_id).await?))
}

#[utoipa::path(
    delete, path = "/accounts/{id}", tag = "accounts",
    params(("id" = i64, Path, description = "Account id")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ApiErrorDoc)
    )
)]
pub async fn delete_one(State(state): State<AccountsState>, id: IdPath) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state.accounts.delete(Some(Account::default().with_id(id))).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete, path = "/accounts/clientId/{client_id}", tag = "accounts",
    params(("client_id" = i64, Path, description = "Client id")),
    responses((status = 200, description = "Accounts of the client deleted"))
)]
pub async fn delete_all_of_client(
    State(state): State<AccountsState>,
    client_id: IdPath,
) -> Result<StatusCode, ApiError> {
    let Path(client_id) = client_id?;
    let removed = state.accounts.delete_all_of_client(client_id).await?;
    info!(client_id, removed, "delete_all_of_client");
    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete, path = "/accounts/list", tag = "accounts",
    request_body = [crate::openapi::AccountDoc],
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ApiErrorDoc)
    )
)]
pub async fn delete_list(State(state): State<AccountsState>, body: ListBody) -> Result<StatusCode, ApiError> {
    let Json(accounts) = body?;
    state.accounts.delete_many(accounts).await?;
    Ok(StatusCode::OK)
}
