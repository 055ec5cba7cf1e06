use chrono::NaiveDate;
use models::client;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::not_blank;

use crate::account::Account;

/// Client as exchanged over HTTP. `accounts` is only present when the
/// accounts service was consulted (single-client reads and writes).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    #[serde(default)]
    pub id: Option<i64>,
    #[validate(
        required(message = "must not be null"),
        length(min = 1, max = 255, message = "size must be between 1 and 255"),
        custom(function = "not_blank", message = "must not be blank")
    )]
    #[serde(default)]
    pub name: Option<String>,
    #[validate(
        required(message = "must not be null"),
        length(min = 1, max = 255, message = "size must be between 1 and 255"),
        custom(function = "not_blank", message = "must not be blank")
    )]
    #[serde(default)]
    pub surname: Option<String>,
    #[validate(length(max = 255, message = "size must be between 0 and 255"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accounts: Option<Vec<Account>>,
}

impl Client {
    pub fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self { name: Some(name.into()), surname: Some(surname.into()), ..Self::default() }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_accounts(mut self, accounts: Vec<Account>) -> Self {
        self.accounts = Some(accounts);
        self
    }
}

impl From<client::Model> for Client {
    fn from(m: client::Model) -> Self {
        Self {
            id: Some(m.id),
            name: Some(m.name),
            surname: Some(m.surname),
            middle_name: m.middle_name,
            birthday: m.birthday,
            accounts: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn birthday_is_iso_date() {
        let c: Client = serde_json::from_str(r#"{"name":"Ivan","surname":"Petrov","middleName":"Ivanovich","birthday":"1985-03-14"}"#).unwrap();
        assert_eq!(c.birthday, NaiveDate::from_ymd_opt(1985, 3, 14));
        assert_eq!(c.middle_name.as_deref(), Some("Ivanovich"));

        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["birthday"], "1985-03-14");
        assert!(json.get("accounts").is_none());
    }
}
