use std::time::Duration;

use async_trait::async_trait;
use common::metrics::record_mks_call;
use common::ApiErrorDto;
use reqwest::Method;
use tracing::{debug, warn};

use crate::account::Account;
use crate::errors::ServiceError;

use super::AccountsMks;

/// Accounts service reached over REST.
pub struct RestAccountsMks {
    client: reqwest::Client,
    base_url: String,
}

impl RestAccountsMks {
    /// Build a client whose every request gives up after `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ServiceError::Other(format!("http client: {e}")))?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one request and hand back the body of a 2xx answer; `None`
    /// when that body is empty or a JSON `null`.
    async fn exchange(
        &self,
        operation: &'static str,
        method: Method,
        path: String,
        body: Option<&[Account]>,
    ) -> Result<(String, Option<String>), ServiceError> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method.clone(), &url);
        if let Some(body) = body {
            req = req.json(body);
        }
        debug!(operation, %method, %url, "mks_request");

        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(e) => {
                record_mks_call(operation, false);
                warn!(operation, %url, error = %e, "mks_transport_error");
                return Err(ServiceError::BadMksRequest(format!(
                    "Mks Accounts Error, url: {} {}, cause: {}",
                    method, url, e
                )));
            }
        };

        let status = resp.status();
        let text = resp.text().await.map_err(|e| {
            record_mks_call(operation, false);
            ServiceError::BadMksRequest(format!("Mks Accounts Error, url: {} {}, cause: {}", method, url, e))
        })?;

        if !status.is_success() {
            record_mks_call(operation, false);
            let (remote_type, detail) = match serde_json::from_str::<ApiErrorDto>(&text) {
                Ok(dto) => (dto.error_type(), format!("{}: {}", dto.err_type, dto.message)),
                Err(_) => (None, text),
            };
            warn!(operation, %url, status = status.as_u16(), remote_type = ?remote_type, %detail, "mks_error_response");
            return Err(ServiceError::BadMksRequest(format!(
                "Mks Accounts Error, url: {} {}, status: {}, error: {}",
                method,
                url,
                status.as_u16(),
                detail
            )));
        }

        record_mks_call(operation, true);
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Ok((url, None));
        }
        Ok((url, Some(text)))
    }

    async fn exchange_list(
        &self,
        operation: &'static str,
        method: Method,
        path: String,
        body: Option<&[Account]>,
    ) -> Result<Vec<Account>, ServiceError> {
        let (url, text) = self.exchange(operation, method, path, body).await?;
        let text = text.ok_or_else(|| ServiceError::MksResponseNull(format!("Mks Accounts returned no accounts, url: {}", url)))?;
        serde_json::from_str(&text)
            .map_err(|e| ServiceError::MksResponseUnknown(format!("Mks Accounts response not understood, url: {}, cause: {}", url, e)))
    }
}

#[async_trait]
impl AccountsMks for RestAccountsMks {
    async fn find_accounts_by_client_id(&self, client_id: i64) -> Result<Vec<Account>, ServiceError> {
        self.exchange_list("find_accounts_by_client_id", Method::GET, format!("/accounts/ClientId/{client_id}"), None)
            .await
    }

    async fn create_accounts(&self, accounts: &[Account]) -> Result<Vec<Account>, ServiceError> {
        self.exchange_list("create_accounts", Method::POST, "/accounts/list".to_string(), Some(accounts))
            .await
    }

    async fn update_accounts_of_client(&self, client_id: i64, accounts: &[Account]) -> Result<Vec<Account>, ServiceError> {
        self.exchange_list(
            "update_accounts_of_client",
            Method::PUT,
            format!("/accounts/list/client/{client_id}"),
            Some(accounts),
        )
        .await
    }

    async fn delete_accounts_by_client_id(&self, client_id: i64) -> Result<(), ServiceError> {
        self.exchange("delete_accounts_by_client_id", Method::DELETE, format!("/accounts/clientId/{client_id}"), None)
            .await?;
        Ok(())
    }
}
