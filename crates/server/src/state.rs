use std::sync::Arc;

use service::account::repository::AccountRepository;
use service::account::AccountService;
use service::client::repository::ClientRepository;
use service::client::ClientService;
use service::mks::AccountsMks;

pub type DynAccountService = AccountService<dyn AccountRepository>;
pub type DynClientService = ClientService<dyn ClientRepository, dyn AccountsMks>;

#[derive(Clone)]
pub struct AccountsState {
    pub accounts: Arc<DynAccountService>,
}

impl AccountsState {
    pub fn new(repo: Arc<dyn AccountRepository>) -> Self {
        Self { accounts: Arc::new(AccountService::new(repo)) }
    }
}

#[derive(Clone)]
pub struct ClientsState {
    pub clients: Arc<DynClientService>,
}

impl ClientsState {
    pub fn new(repo: Arc<dyn ClientRepository>, mks: Arc<dyn AccountsMks>) -> Self {
        Self { clients: Arc::new(ClientService::new(repo, mks)) }
    }
}
