use validator::Validate;

use crate::errors::ServiceError;
use crate::validation::{first_violation, Validations};

use super::domain::Account;

#[derive(Debug, Clone, Copy, Default)]
pub struct AccountValidations;

impl Validations<Account> for AccountValidations {
    const ITEM: &'static str = "account";
    const ITEMS: &'static str = "accounts";

    fn validate_item(&self, account: &Account) -> Result<(), ServiceError> {
        account.validate().map_err(|e| first_violation(&e))
    }

    fn id_of(account: &Account) -> Option<i64> {
        account.id
    }
}

impl AccountValidations {
    pub fn account_has_client_id(&self, account: &Account, client_id: i64) -> Result<(), ServiceError> {
        if account.client_id != Some(client_id) {
            let id = account.id.map(|id| id.to_string()).unwrap_or_else(|| "null".into());
            return Err(ServiceError::Validation(format!(
                "Account {} doesn't belong to client with id: {}",
                id, client_id
            )));
        }
        Ok(())
    }

    pub fn all_accounts_have_client_id(&self, accounts: &[&Account], client_id: i64) -> Result<(), ServiceError> {
        accounts.iter().try_for_each(|a| self.account_has_client_id(a, client_id))
    }
}
