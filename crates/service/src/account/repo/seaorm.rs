use std::collections::HashSet;

use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

use models::account;

use crate::account::domain::Account;
use crate::account::repository::AccountRepository;
use crate::errors::ServiceError;

pub struct SeaOrmAccountRepository {
    pub db: DatabaseConnection,
}

fn to_active_model(a: &Account) -> Result<account::ActiveModel, ServiceError> {
    let (Some(balance), Some(currency), Some(client_id), Some(name)) = (a.balance, a.currency, a.client_id, a.name.clone())
    else {
        return Err(ServiceError::Validation("account is missing required fields".into()));
    };
    account::validate_name(&name)?;
    Ok(account::ActiveModel {
        id: match a.id {
            Some(id) => Set(id),
            None => NotSet,
        },
        balance: Set(balance),
        currency: Set(currency),
        client_id: Set(client_id),
        name: Set(name),
    })
}

/// Insert when the account has no id yet, update otherwise.
async fn save<C: ConnectionTrait>(conn: &C, a: &Account) -> Result<Account, ServiceError> {
    let am = to_active_model(a)?;
    let saved = if a.id.is_some() { am.update(conn).await? } else { am.insert(conn).await? };
    Ok(saved.into())
}

#[async_trait::async_trait]
impl AccountRepository for SeaOrmAccountRepository {
    async fn find_all(&self) -> Result<Vec<Account>, ServiceError> {
        let rows = account::Entity::find()
            .order_by_asc(account::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Account::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, ServiceError> {
        let row = account::Entity::find_by_id(id).one(&self.db).await?;
        Ok(row.map(Account::from))
    }

    async fn find_by_client_id(&self, client_id: i64) -> Result<Vec<Account>, ServiceError> {
        let rows = account::find_by_client_id(&self.db, client_id).await?;
        Ok(rows.into_iter().map(Account::from).collect())
    }

    async fn insert(&self, account: Account) -> Result<Account, ServiceError> {
        let saved = to_active_model(&account)?.insert(&self.db).await?;
        Ok(saved.into())
    }

    async fn insert_many(&self, accounts: Vec<Account>) -> Result<Vec<Account>, ServiceError> {
        let txn = self.db.begin().await?;
        let mut saved = Vec::with_capacity(accounts.len());
        for a in &accounts {
            saved.push(save(&txn, a).await?);
        }
        txn.commit().await?;
        Ok(saved)
    }

    async fn update(&self, account: Account) -> Result<Account, ServiceError> {
        let saved = to_active_model(&account)?.update(&self.db).await?;
        Ok(saved.into())
    }

    async fn sync_client_accounts(&self, client_id: i64, accounts: Vec<Account>) -> Result<Vec<Account>, ServiceError> {
        let txn = self.db.begin().await?;

        let keep: HashSet<i64> = accounts.iter().filter_map(|a| a.id).collect();
        let stale: Vec<i64> = account::find_by_client_id(&txn, client_id)
            .await?
            .into_iter()
            .map(|m| m.id)
            .filter(|id| !keep.contains(id))
            .collect();
        if !stale.is_empty() {
            account::Entity::delete_many()
                .filter(account::Column::Id.is_in(stale))
                .exec(&txn)
                .await?;
        }

        let mut saved = Vec::with_capacity(accounts.len());
        for a in &accounts {
            saved.push(save(&txn, a).await?);
        }
        txn.commit().await?;
        Ok(saved)
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let res = account::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }

    async fn delete_many(&self, ids: &[i64]) -> Result<u64, ServiceError> {
        if ids.is_empty() {
            return Ok(0);
        }
        let res = account::Entity::delete_many()
            .filter(account::Column::Id.is_in(ids.iter().copied()))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected)
    }

    async fn delete_by_client_id(&self, client_id: i64) -> Result<u64, ServiceError> {
        Ok(account::delete_by_client_id(&self.db, client_id).await?)
    }
}
