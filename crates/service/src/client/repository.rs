use async_trait::async_trait;

use crate::errors::ServiceError;

use super::domain::Client;

/// Persistence of client rows. Accounts are never stored here; returned
/// clients carry `accounts: None`.
#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Client>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Client>, ServiceError>;
    async fn exists(&self, id: i64) -> Result<bool, ServiceError>;
    async fn insert(&self, client: Client) -> Result<Client, ServiceError>;
    async fn update(&self, client: Client) -> Result<Client, ServiceError>;
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Mutex;

    pub struct MockClientRepository {
        rows: Mutex<BTreeMap<i64, Client>>,
        next_id: AtomicI64,
    }

    impl Default for MockClientRepository {
        fn default() -> Self {
            Self { rows: Mutex::new(BTreeMap::new()), next_id: AtomicI64::new(1) }
        }
    }

    impl MockClientRepository {
        pub fn len(&self) -> usize {
            self.rows.lock().unwrap().len()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    #[async_trait]
    impl ClientRepository for MockClientRepository {
        async fn find_all(&self) -> Result<Vec<Client>, ServiceError> {
            Ok(self.rows.lock().unwrap().values().cloned().collect())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Client>, ServiceError> {
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }

        async fn exists(&self, id: i64) -> Result<bool, ServiceError> {
            Ok(self.rows.lock().unwrap().contains_key(&id))
        }

        async fn insert(&self, mut client: Client) -> Result<Client, ServiceError> {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            client.id = Some(id);
            client.accounts = None;
            self.rows.lock().unwrap().insert(id, client.clone());
            Ok(client)
        }

        async fn update(&self, mut client: Client) -> Result<Client, ServiceError> {
            let id = client.id.ok_or_else(|| ServiceError::Validation("client id required".into()))?;
            client.accounts = None;
            let mut rows = self.rows.lock().unwrap();
            if !rows.contains_key(&id) {
                return Err(ServiceError::not_found("Client", id));
            }
            rows.insert(id, client.clone());
            Ok(client)
        }

        async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
            Ok(self.rows.lock().unwrap().remove(&id).is_some())
        }
    }
}
