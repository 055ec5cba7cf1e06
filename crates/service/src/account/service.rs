use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::errors::ServiceError;
use crate::validation::Validations;

use super::domain::Account;
use super::repository::AccountRepository;
use super::validation::AccountValidations;

const NULL_LIST: &str = "Null accounts list not allowed";

/// Accounts business service independent of web framework
pub struct AccountService<R: AccountRepository + ?Sized> {
    repo: Arc<R>,
    validations: AccountValidations,
}

impl<R: AccountRepository + ?Sized> AccountService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo, validations: AccountValidations }
    }

    pub async fn get_all(&self) -> Result<Vec<Account>, ServiceError> {
        self.repo.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<Account, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Account", id))
    }

    pub async fn find_by_client_id(&self, client_id: i64) -> Result<Vec<Account>, ServiceError> {
        self.repo.find_by_client_id(client_id).await
    }

    /// Create a single account; the id is generated.
    ///
    /// # Examples
    /// ```
    /// use service::account::{AccountService, Account, repository::mock::MockAccountRepository};
    /// use models::account::Currency;
    /// use rust_decimal::Decimal;
    /// use std::sync::Arc;
    /// let svc = AccountService::new(Arc::new(MockAccountRepository::default()));
    /// let acc = Account::new(Decimal::new(23423, 0), Currency::Usd, 55, "New Wonderful Account");
    /// let saved = tokio_test::block_on(svc.create(Some(acc))).unwrap();
    /// assert!(saved.id.is_some());
    /// ```
    #[instrument(skip(self, account))]
    pub async fn create(&self, account: Option<Account>) -> Result<Account, ServiceError> {
        let account = self.validations.validate_new(account.as_ref())?;
        let saved = self.repo.insert(account.clone()).await?;
        info!(account_id = ?saved.id, client_id = ?saved.client_id, "account_created");
        Ok(saved)
    }

    /// Create every account of the list, or none of them.
    #[instrument(skip(self, accounts))]
    pub async fn create_many(&self, accounts: Option<Vec<Option<Account>>>) -> Result<Vec<Account>, ServiceError> {
        let accounts = accounts.ok_or_else(|| ServiceError::NullArgument(NULL_LIST.into()))?;
        let items = self.validations.validate_new_list(&accounts)?;
        let saved = self.repo.insert_many(items.into_iter().cloned().collect()).await?;
        info!(count = saved.len(), "accounts_created");
        Ok(saved)
    }

    #[instrument(skip(self, account))]
    pub async fn update(&self, account: Option<Account>) -> Result<Account, ServiceError> {
        let account = self.validations.validate_existing(account.as_ref())?;
        let id = account.id.unwrap_or_default();
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ServiceError::not_found("Account", id));
        }
        let saved = self.repo.update(account.clone()).await?;
        info!(account_id = id, "account_updated");
        Ok(saved)
    }

    /// Replace the account set of a client.
    ///
    /// Accounts with an id must already belong to the client and are
    /// updated, accounts without one are created, and every other account
    /// of the client is removed.
    #[instrument(skip(self, accounts))]
    pub async fn update_all_of_client(
        &self,
        accounts: Option<Vec<Option<Account>>>,
        client_id: i64,
    ) -> Result<Vec<Account>, ServiceError> {
        let accounts = accounts.ok_or_else(|| ServiceError::NullArgument(NULL_LIST.into()))?;
        let items = self.validations.validate_list(&accounts)?;
        for item in &items {
            self.validations.validate_item(item)?;
        }
        self.validations.all_accounts_have_client_id(&items, client_id)?;

        for id in items.iter().filter_map(|a| a.id) {
            match self.repo.find_by_id(id).await? {
                None => return Err(ServiceError::not_found("Account", id)),
                Some(stored) if stored.client_id != Some(client_id) => {
                    warn!(account_id = id, client_id, "foreign_account_in_client_update");
                    return Err(ServiceError::Validation(format!(
                        "Account {} doesn't belong to client with id: {}",
                        id, client_id
                    )));
                }
                Some(_) => {}
            }
        }

        let saved = self
            .repo
            .sync_client_accounts(client_id, items.into_iter().cloned().collect())
            .await?;
        info!(client_id, count = saved.len(), "client_accounts_replaced");
        Ok(saved)
    }

    #[instrument(skip(self, account))]
    pub async fn delete(&self, account: Option<Account>) -> Result<(), ServiceError> {
        let account = self.validations.validate_not_null(account.as_ref(), "Null account not allowed")?;
        let id = account
            .id
            .ok_or_else(|| ServiceError::Validation("Account to delete must have an id".into()))?;
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("Account", id));
        }
        info!(account_id = id, "account_deleted");
        Ok(())
    }

    /// Delete the listed accounts. Nothing is removed when one of them is
    /// unknown.
    #[instrument(skip(self, accounts))]
    pub async fn delete_many(&self, accounts: Option<Vec<Option<Account>>>) -> Result<u64, ServiceError> {
        let accounts = accounts.ok_or_else(|| ServiceError::NullArgument(NULL_LIST.into()))?;
        let items = self.validations.validate_list(&accounts)?;

        let mut ids = Vec::with_capacity(items.len());
        for item in items {
            let id = item
                .id
                .ok_or_else(|| ServiceError::Validation("Account to delete must have an id".into()))?;
            if self.repo.find_by_id(id).await?.is_none() {
                return Err(ServiceError::not_found("Account", id));
            }
            ids.push(id);
        }

        let removed = self.repo.delete_many(&ids).await?;
        info!(count = removed, "accounts_deleted");
        Ok(removed)
    }

    #[instrument(skip(self))]
    pub async fn delete_all_of_client(&self, client_id: i64) -> Result<u64, ServiceError> {
        let removed = self.repo.delete_by_client_id(client_id).await?;
        info!(client_id, count = removed, "client_accounts_deleted");
        Ok(removed)
    }
}
