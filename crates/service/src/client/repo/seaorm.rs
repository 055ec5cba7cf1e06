use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, QueryOrder, Set};

use models::client;

use crate::client::domain::Client;
use crate::client::repository::ClientRepository;
use crate::errors::ServiceError;

pub struct SeaOrmClientRepository {
    pub db: DatabaseConnection,
}

fn to_active_model(c: &Client) -> Result<client::ActiveModel, ServiceError> {
    let (Some(name), Some(surname)) = (c.name.clone(), c.surname.clone()) else {
        return Err(ServiceError::Validation("client is missing required fields".into()));
    };
    client::validate_names(&name, &surname)?;
    Ok(client::ActiveModel {
        id: match c.id {
            Some(id) => Set(id),
            None => NotSet,
        },
        name: Set(name),
        surname: Set(surname),
        middle_name: Set(c.middle_name.clone()),
        birthday: Set(c.birthday),
    })
}

#[async_trait::async_trait]
impl ClientRepository for SeaOrmClientRepository {
    async fn find_all(&self) -> Result<Vec<Client>, ServiceError> {
        let rows = client::Entity::find().order_by_asc(client::Column::Id).all(&self.db).await?;
        Ok(rows.into_iter().map(Client::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Client>, ServiceError> {
        let row = client::Entity::find_by_id(id).one(&self.db).await?;
        Ok(row.map(Client::from))
    }

    async fn exists(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(client::exists(&self.db, id).await?)
    }

    async fn insert(&self, c: Client) -> Result<Client, ServiceError> {
        let saved = to_active_model(&c)?.insert(&self.db).await?;
        Ok(saved.into())
    }

    async fn update(&self, c: Client) -> Result<Client, ServiceError> {
        let saved = to_active_model(&c)?.update(&self.db).await?;
        Ok(saved.into())
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let res = client::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}
