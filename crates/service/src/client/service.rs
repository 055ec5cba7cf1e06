use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::account::Account;
use crate::errors::ServiceError;
use crate::mks::AccountsMks;
use crate::validation::Validations;

use super::domain::Client;
use super::repository::ClientRepository;
use super::validation::ClientValidations;

/// Clients business service. Client rows live in `repo`, their accounts in
/// the accounts service behind `mks`.
pub struct ClientService<R: ClientRepository + ?Sized, M: AccountsMks + ?Sized> {
    repo: Arc<R>,
    mks: Arc<M>,
    validations: ClientValidations,
}

fn stamp(accounts: &[Account], client_id: i64) -> Vec<Account> {
    accounts
        .iter()
        .cloned()
        .map(|a| Account { client_id: Some(client_id), ..a })
        .collect()
}

impl<R: ClientRepository + ?Sized, M: AccountsMks + ?Sized> ClientService<R, M> {
    pub fn new(repo: Arc<R>, mks: Arc<M>) -> Self {
        Self { repo, mks, validations: ClientValidations }
    }

    /// All clients, without their accounts.
    pub async fn get_all(&self) -> Result<Vec<Client>, ServiceError> {
        self.repo.find_all().await
    }

    /// One client with its accounts attached.
    #[instrument(skip(self))]
    pub async fn find_one(&self, id: i64) -> Result<Option<Client>, ServiceError> {
        let Some(client) = self.repo.find_by_id(id).await? else {
            return Ok(None);
        };
        let accounts = self.mks.find_accounts_by_client_id(id).await?;
        Ok(Some(client.with_accounts(accounts)))
    }

    /// Create a client and, if given, its accounts.
    ///
    /// # Examples
    /// ```
    /// use service::client::{ClientService, Client, repository::mock::MockClientRepository};
    /// use service::mks::mock::MockAccountsMks;
    /// use std::sync::Arc;
    /// let svc = ClientService::new(Arc::new(MockClientRepository::default()), Arc::new(MockAccountsMks::default()));
    /// let saved = tokio_test::block_on(svc.create(Some(Client::new("Ivan", "Petrov")))).unwrap();
    /// assert!(saved.id.is_some());
    /// ```
    #[instrument(skip(self, client))]
    pub async fn create(&self, client: Option<Client>) -> Result<Client, ServiceError> {
        let client = self.validations.validate_new(client.as_ref())?;
        let saved = self.repo.insert(client.clone()).await?;
        let id = saved.id.unwrap_or_default();
        info!(client_id = id, "client_created");

        let Some(accounts) = client.accounts.as_deref() else {
            return Ok(saved);
        };
        if accounts.is_empty() {
            return Ok(saved.with_accounts(Vec::new()));
        }
        match self.mks.create_accounts(&stamp(accounts, id)).await {
            Ok(created) => Ok(saved.with_accounts(created)),
            Err(e) => {
                warn!(client_id = id, error = %e, "client_accounts_not_created");
                // the client must not outlive its failed account creation
                if let Err(undo) = self.repo.delete(id).await {
                    warn!(client_id = id, error = %undo, "client_rollback_failed");
                }
                Err(e)
            }
        }
    }

    /// Update a client row; supplied accounts replace the stored ones.
    #[instrument(skip(self, client))]
    pub async fn update(&self, client: Option<Client>) -> Result<Client, ServiceError> {
        let client = self.validations.validate_existing(client.as_ref())?;
        let id = client.id.unwrap_or_default();
        if !self.repo.exists(id).await? {
            return Err(ServiceError::not_found("Client", id));
        }
        let saved = self.repo.update(client.clone()).await?;
        info!(client_id = id, "client_updated");

        match client.accounts.as_deref() {
            Some(accounts) => {
                let replaced = self.mks.update_accounts_of_client(id, &stamp(accounts, id)).await?;
                Ok(saved.with_accounts(replaced))
            }
            None => Ok(saved),
        }
    }

    /// Delete a client together with its accounts.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repo.exists(id).await? {
            return Err(ServiceError::not_found("Client", id));
        }
        self.mks.delete_accounts_by_client_id(id).await?;
        self.repo.delete(id).await?;
        info!(client_id = id, "client_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::repository::mock::MockClientRepository;
    use crate::mks::mock::MockAccountsMks;
    use common::ErrorType;
    use models::account::Currency;
    use rust_decimal::Decimal;

    type Svc = ClientService<MockClientRepository, MockAccountsMks>;

    fn svc() -> (Arc<MockClientRepository>, Arc<MockAccountsMks>, Svc) {
        let repo = Arc::new(MockClientRepository::default());
        let mks = Arc::new(MockAccountsMks::default());
        (repo.clone(), mks.clone(), ClientService::new(repo, mks))
    }

    fn account(name: &str) -> Account {
        // client id is stamped by the service
        Account { client_id: None, ..Account::new(Decimal::new(5000, 2), Currency::Eur, 0, name) }
    }

    #[tokio::test]
    async fn create_stamps_accounts_with_the_new_client_id() {
        let (_, mks, svc) = svc();
        let input = Client::new("Ivan", "Petrov").with_accounts(vec![account("a"), account("b")]);
        let saved = svc.create(Some(input)).await.unwrap();
        let id = saved.id.unwrap();

        let accounts = saved.accounts.unwrap();
        assert_eq!(accounts.len(), 2);
        assert!(accounts.iter().all(|a| a.client_id == Some(id) && a.id.is_some()));
        assert_eq!(mks.accounts_of(id).len(), 2);
    }

    #[tokio::test]
    async fn create_without_accounts_skips_the_accounts_service() {
        let (_, mks, svc) = svc();
        let saved = svc.create(Some(Client::new("Ivan", "Petrov"))).await.unwrap();
        assert!(saved.accounts.is_none());
        assert!(mks.calls().is_empty());
    }

    #[tokio::test]
    async fn failed_account_creation_removes_the_client() {
        let (repo, mks, svc) = svc();
        mks.fail_next(ErrorType::BadMksRequest);
        let input = Client::new("Ivan", "Petrov").with_accounts(vec![account("a")]);
        let err = svc.create(Some(input)).await.unwrap_err();
        assert_eq!(err.error_type(), ErrorType::BadMksRequest);
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn create_rejects_invalid_clients() {
        let (repo, _, svc) = svc();
        assert_eq!(svc.create(None).await.unwrap_err().error_type(), ErrorType::NullArgument);
        let err = svc.create(Some(Client::new("", "Petrov"))).await.unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Validation);
        let err = svc.create(Some(Client::new("Ivan", "Petrov").with_id(1))).await.unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Validation);
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn find_one_attaches_accounts() {
        let (_, _, svc) = svc();
        let saved = svc
            .create(Some(Client::new("Ivan", "Petrov").with_accounts(vec![account("a")])))
            .await
            .unwrap();
        let found = svc.find_one(saved.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(found.accounts.map(|a| a.len()), Some(1));
        assert!(svc.find_one(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn get_all_leaves_accounts_out() {
        let (_, mks, svc) = svc();
        svc.create(Some(Client::new("Ivan", "Petrov").with_accounts(vec![account("a")])))
            .await
            .unwrap();
        let calls_before = mks.calls().len();
        let all = svc.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert!(all[0].accounts.is_none());
        assert_eq!(mks.calls().len(), calls_before);
    }

    #[tokio::test]
    async fn update_replaces_accounts_when_given() {
        let (_, mks, svc) = svc();
        let saved = svc
            .create(Some(Client::new("Ivan", "Petrov").with_accounts(vec![account("a"), account("b")])))
            .await
            .unwrap();
        let id = saved.id.unwrap();

        let changed = Client { surname: Some("Sidorov".into()), ..saved }.with_accounts(vec![account("c")]);
        let updated = svc.update(Some(changed)).await.unwrap();
        assert_eq!(updated.surname.as_deref(), Some("Sidorov"));
        let names: Vec<_> = mks.accounts_of(id).into_iter().filter_map(|a| a.name).collect();
        assert_eq!(names, vec!["c".to_string()]);
    }

    #[tokio::test]
    async fn update_unknown_client_is_not_found() {
        let (_, _, svc) = svc();
        let err = svc.update(Some(Client::new("Ivan", "Petrov").with_id(42))).await.unwrap_err();
        assert_eq!(err.error_type(), ErrorType::NotFound);
    }

    #[tokio::test]
    async fn delete_removes_accounts_first() {
        let (repo, mks, svc) = svc();
        let saved = svc
            .create(Some(Client::new("Ivan", "Petrov").with_accounts(vec![account("a")])))
            .await
            .unwrap();
        let id = saved.id.unwrap();
        svc.delete(id).await.unwrap();
        assert!(repo.is_empty());
        assert!(mks.accounts_of(id).is_empty());
        assert_eq!(mks.calls().last().map(String::as_str), Some(format!("delete {id}").as_str()));

        assert_eq!(svc.delete(id).await.unwrap_err().error_type(), ErrorType::NotFound);
    }

    #[tokio::test]
    async fn failed_account_deletion_keeps_the_client() {
        let (repo, mks, svc) = svc();
        let saved = svc.create(Some(Client::new("Ivan", "Petrov"))).await.unwrap();
        mks.fail_next(ErrorType::BadMksRequest);
        let err = svc.delete(saved.id.unwrap()).await.unwrap_err();
        assert_eq!(err.error_type(), ErrorType::BadMksRequest);
        assert_eq!(repo.len(), 1);
    }
}
