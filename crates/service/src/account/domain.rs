use models::account::{self, Currency};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::not_blank;

/// Account as exchanged over HTTP, by both services.
///
/// Every field is optional on the wire so a missing value surfaces as a
/// validation error instead of a decoding failure.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(default)]
    pub id: Option<i64>,
    #[validate(required(message = "must not be null"))]
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub balance: Option<Decimal>,
    #[validate(required(message = "must not be null"))]
    #[serde(default)]
    pub currency: Option<Currency>,
    #[validate(required(message = "must not be null"))]
    #[serde(default)]
    pub client_id: Option<i64>,
    #[validate(
        required(message = "must not be null"),
        length(min = 1, max = 255, message = "size must be between 1 and 255"),
        custom(function = "not_blank", message = "must not be blank")
    )]
    #[serde(default)]
    pub name: Option<String>,
}

impl Account {
    pub fn new(balance: Decimal, currency: Currency, client_id: i64, name: impl Into<String>) -> Self {
        Self {
            id: None,
            balance: Some(balance),
            currency: Some(currency),
            client_id: Some(client_id),
            name: Some(name.into()),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

impl From<account::Model> for Account {
    fn from(m: account::Model) -> Self {
        Self {
            id: Some(m.id),
            balance: Some(m.balance),
            currency: Some(m.currency),
            client_id: Some(m.client_id),
            name: Some(m.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn json_is_camel_case_with_numeric_balance() {
        let acc = Account::new(Decimal::new(10050, 2), Currency::Rub, 55, "Deposit Rub").with_id(1);
        let json = serde_json::to_value(&acc).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["clientId"], 55);
        assert_eq!(json["currency"], "RUB");
        assert_eq!(json["balance"].to_string(), "100.50");
    }

    #[test]
    fn large_balances_keep_every_digit() {
        let big = Decimal::from_str("12345678901234567.89").unwrap();
        let acc = Account::new(big, Currency::Rub, 1, "Big");
        let text = serde_json::to_string(&acc).unwrap();
        assert!(text.contains(r#""balance":12345678901234567.89"#), "{}", text);
        let back: Account = serde_json::from_str(&text).unwrap();
        assert_eq!(back.balance, Some(big));

        let parsed: Account = serde_json::from_str(r#"{"balance": 98765432109876.54}"#).unwrap();
        assert_eq!(parsed.balance, Some(Decimal::from_str("98765432109876.54").unwrap()));
    }

    #[test]
    fn null_balance_decodes_as_none() {
        let acc: Account = serde_json::from_str(r#"{"balance":null,"name":"Acc1"}"#).unwrap();
        assert_eq!(acc.balance, None);
    }

    #[test]
    fn missing_fields_decode_as_none() {
        let acc: Account = serde_json::from_str(r#"{"name":"Acc1"}"#).unwrap();
        assert_eq!(acc.balance, None);
        assert_eq!(acc.currency, None);
        assert_eq!(acc.client_id, None);
        assert_eq!(acc.name.as_deref(), Some("Acc1"));
    }

    #[test]
    fn unknown_currency_is_rejected() {
        let res = serde_json::from_str::<Account>(r#"{"currency":"GBP"}"#);
        assert!(res.is_err());
    }
}
