use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use common::ErrorType;

use crate::account::Account;
use crate::errors::ServiceError;

use super::AccountsMks;

/// In-memory stand-in for the accounts service.
///
/// Every call is appended to `calls`; `fail_next` makes the next call
/// fail with the given error type.
pub struct MockAccountsMks {
    accounts: Mutex<BTreeMap<i64, Account>>,
    next_id: AtomicI64,
    fail: Mutex<Option<ErrorType>>,
    calls: Mutex<Vec<String>>,
}

impl Default for MockAccountsMks {
    fn default() -> Self {
        Self {
            accounts: Mutex::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
            fail: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl MockAccountsMks {
    pub fn fail_next(&self, kind: ErrorType) {
        *self.fail.lock().unwrap() = Some(kind);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn accounts_of(&self, client_id: i64) -> Vec<Account> {
        let accounts = self.accounts.lock().unwrap();
        accounts.values().filter(|a| a.client_id == Some(client_id)).cloned().collect()
    }

    fn enter(&self, call: String) -> Result<(), ServiceError> {
        self.calls.lock().unwrap().push(call);
        match self.fail.lock().unwrap().take() {
            Some(kind) => Err(ServiceError::new(kind, "Mks Accounts Error, url: mock")),
            None => Ok(()),
        }
    }

    fn store(&self, accounts: &[Account]) -> Vec<Account> {
        let mut rows = self.accounts.lock().unwrap();
        accounts
            .iter()
            .cloned()
            .map(|mut a| {
                let id = *a.id.get_or_insert_with(|| self.next_id.fetch_add(1, Ordering::SeqCst));
                rows.insert(id, a.clone());
                a
            })
            .collect()
    }
}

#[async_trait]
impl AccountsMks for MockAccountsMks {
    async fn find_accounts_by_client_id(&self, client_id: i64) -> Result<Vec<Account>, ServiceError> {
        self.enter(format!("find {client_id}"))?;
        Ok(self.accounts_of(client_id))
    }

    async fn create_accounts(&self, accounts: &[Account]) -> Result<Vec<Account>, ServiceError> {
        self.enter(format!("create {}", accounts.len()))?;
        Ok(self.store(accounts))
    }

    async fn update_accounts_of_client(&self, client_id: i64, accounts: &[Account]) -> Result<Vec<Account>, ServiceError> {
        self.enter(format!("update {client_id}"))?;
        self.accounts.lock().unwrap().retain(|_, a| a.client_id != Some(client_id));
        Ok(self.store(accounts))
    }

    async fn delete_accounts_by_client_id(&self, client_id: i64) -> Result<(), ServiceError> {
        self.enter(format!("delete {client_id}"))?;
        self.accounts.lock().unwrap().retain(|_, a| a.client_id != Some(client_id));
        Ok(())
    }
}
