use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder};
use serde::{Deserialize, Serialize};

use crate::errors;

/// Currencies an account can be held in; stored as the ISO code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(3))")]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[sea_orm(string_value = "RUB")]
    Rub,
    #[sea_orm(string_value = "USD")]
    Usd,
    #[sea_orm(string_value = "EUR")]
    Eur,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "account")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "Decimal(Some((19, 2)))")]
    pub balance: Decimal,
    pub currency: Currency,
    pub client_id: i64,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("account name required".into()));
    }
    if name.chars().count() > 255 {
        return Err(errors::ModelError::Validation("account name longer than 255 characters".into()));
    }
    Ok(())
}

/// All accounts of one client, oldest first.
pub async fn find_by_client_id<C: ConnectionTrait>(db: &C, client_id: i64) -> Result<Vec<Model>, errors::ModelError> {
    let rows = Entity::find()
        .filter(Column::ClientId.eq(client_id))
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

/// Remove every account of a client; returns how many rows went away.
pub async fn delete_by_client_id<C: ConnectionTrait>(db: &C, client_id: i64) -> Result<u64, errors::ModelError> {
    let res = Entity::delete_many()
        .filter(Column::ClientId.eq(client_id))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}
