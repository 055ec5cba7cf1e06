//! Client side of the accounts service, used by the clients service.
//!
//! [`AccountsMks`] is the seam: [`rest::RestAccountsMks`] talks HTTP to a
//! running accounts service, [`mock::MockAccountsMks`] keeps accounts in
//! memory for tests.

use async_trait::async_trait;

use crate::account::Account;
use crate::errors::ServiceError;

pub mod mock;
pub mod rest;

pub use rest::RestAccountsMks;

#[async_trait]
pub trait AccountsMks: Send + Sync {
    async fn find_accounts_by_client_id(&self, client_id: i64) -> Result<Vec<Account>, ServiceError>;
    async fn create_accounts(&self, accounts: &[Account]) -> Result<Vec<Account>, ServiceError>;
    /// Replace the whole account set of a client.
    async fn update_accounts_of_client(&self, client_id: i64, accounts: &[Account]) -> Result<Vec<Account>, ServiceError>;
    async fn delete_accounts_by_client_id(&self, client_id: i64) -> Result<(), ServiceError>;
}
