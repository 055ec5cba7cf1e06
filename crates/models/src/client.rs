use sea_orm::{entity::prelude::*, ConnectionTrait, PaginatorTrait};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "client")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub middle_name: Option<String>,
    pub birthday: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_names(name: &str, surname: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() { return Err(errors::ModelError::Validation("client name required".into())); }
    if surname.trim().is_empty() { return Err(errors::ModelError::Validation("client surname required".into())); }
    Ok(())
}

pub async fn exists<C: ConnectionTrait>(db: &C, id: i64) -> Result<bool, errors::ModelError> {
    let n = Entity::find_by_id(id).count(db).await?;
    Ok(n > 0)
}
