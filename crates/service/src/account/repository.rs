use async_trait::async_trait;

use crate::errors::ServiceError;

use super::domain::Account;

/// Persistence of accounts.
///
/// Accounts handed to write methods have passed validation, so every
/// required field is present.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Account>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, ServiceError>;
    async fn find_by_client_id(&self, client_id: i64) -> Result<Vec<Account>, ServiceError>;

    async fn insert(&self, account: Account) -> Result<Account, ServiceError>;
    /// Insert all or nothing.
    async fn insert_many(&self, accounts: Vec<Account>) -> Result<Vec<Account>, ServiceError>;
    async fn update(&self, account: Account) -> Result<Account, ServiceError>;
    /// Make `accounts` the complete account set of `client_id`: accounts with
    /// an id are updated, the rest inserted, and any other account of the
    /// client removed. All or nothing; results keep the input order.
    async fn sync_client_accounts(&self, client_id: i64, accounts: Vec<Account>) -> Result<Vec<Account>, ServiceError>;

    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
    async fn delete_many(&self, ids: &[i64]) -> Result<u64, ServiceError>;
    async fn delete_by_client_id(&self, client_id: i64) -> Result<u64, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::{BTreeMap, HashSet};
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Mutex;

    pub struct MockAccountRepository {
        rows: Mutex<BTreeMap<i64, Account>>, // key: account id
        next_id: AtomicI64,
    }

    impl Default for MockAccountRepository {
        fn default() -> Self {
            Self { rows: Mutex::new(BTreeMap::new()), next_id: AtomicI64::new(1) }
        }
    }

    impl MockAccountRepository {
        fn assign_id(&self, mut account: Account) -> Account {
            account.id = Some(self.next_id.fetch_add(1, Ordering::SeqCst));
            account
        }

        pub fn len(&self) -> usize {
            self.rows.lock().unwrap().len()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    #[async_trait]
    impl AccountRepository for MockAccountRepository {
        async fn find_all(&self) -> Result<Vec<Account>, ServiceError> {
            Ok(self.rows.lock().unwrap().values().cloned().collect())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Account>, ServiceError> {
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }

        async fn find_by_client_id(&self, client_id: i64) -> Result<Vec<Account>, ServiceError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.values().filter(|a| a.client_id == Some(client_id)).cloned().collect())
        }

        async fn insert(&self, account: Account) -> Result<Account, ServiceError> {
            let saved = self.assign_id(account);
            let id = saved.id.unwrap_or_default();
            self.rows.lock().unwrap().insert(id, saved.clone());
            Ok(saved)
        }

        async fn insert_many(&self, accounts: Vec<Account>) -> Result<Vec<Account>, ServiceError> {
            let saved: Vec<Account> = accounts.into_iter().map(|a| self.assign_id(a)).collect();
            let mut rows = self.rows.lock().unwrap();
            for a in &saved {
                rows.insert(a.id.unwrap_or_default(), a.clone());
            }
            Ok(saved)
        }

        async fn update(&self, account: Account) -> Result<Account, ServiceError> {
            let id = account.id.ok_or_else(|| ServiceError::Validation("account id required".into()))?;
            let mut rows = self.rows.lock().unwrap();
            if !rows.contains_key(&id) {
                return Err(ServiceError::not_found("Account", id));
            }
            rows.insert(id, account.clone());
            Ok(account)
        }

        async fn sync_client_accounts(&self, client_id: i64, accounts: Vec<Account>) -> Result<Vec<Account>, ServiceError> {
            let keep: HashSet<i64> = accounts.iter().filter_map(|a| a.id).collect();
            let saved: Vec<Account> = accounts
                .into_iter()
                .map(|a| if a.id.is_some() { a } else { self.assign_id(a) })
                .collect();
            let mut rows = self.rows.lock().unwrap();
            rows.retain(|id, a| a.client_id != Some(client_id) || keep.contains(id));
            for a in &saved {
                rows.insert(a.id.unwrap_or_default(), a.clone());
            }
            Ok(saved)
        }

        async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
            Ok(self.rows.lock().unwrap().remove(&id).is_some())
        }

        async fn delete_many(&self, ids: &[i64]) -> Result<u64, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            Ok(ids.iter().filter(|id| rows.remove(*id).is_some()).count() as u64)
        }

        async fn delete_by_client_id(&self, client_id: i64) -> Result<u64, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|_, a| a.client_id != Some(client_id));
            Ok((before - rows.len()) as u64)
        }
    }
}
