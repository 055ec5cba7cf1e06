use validator::Validate;

use crate::errors::ServiceError;
use crate::validation::{first_violation, Validations};

use super::domain::Client;

#[derive(Debug, Clone, Copy, Default)]
pub struct ClientValidations;

impl Validations<Client> for ClientValidations {
    const ITEM: &'static str = "client";
    const ITEMS: &'static str = "clients";

    fn validate_item(&self, client: &Client) -> Result<(), ServiceError> {
        client.validate().map_err(|e| first_violation(&e))
    }

    fn id_of(client: &Client) -> Option<i64> {
        client.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::ErrorType;

    #[test]
    fn surname_is_required() {
        let c = Client { surname: None, ..Client::new("Ivan", "Petrov") };
        let err = ClientValidations.validate_new(Some(&c)).unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Validation);
        assert_eq!(err.info(), "surname = null. must not be null");
    }

    #[test]
    fn long_middle_name_is_reported_by_json_name() {
        let c = Client { middle_name: Some("x".repeat(256)), ..Client::new("Ivan", "Petrov") };
        let err = ClientValidations.validate_new(Some(&c)).unwrap_err();
        assert!(err.info().starts_with("middleName = "), "{}", err.info());
        assert!(err.info().ends_with("size must be between 0 and 255"));
    }

    #[test]
    fn blank_names_are_rejected() {
        let c = Client::new("\t", "Petrov");
        let err = ClientValidations.validate_new(Some(&c)).unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Validation);
        assert!(err.info().starts_with("name = "), "{}", err.info());
        assert!(err.info().ends_with("must not be blank"));

        let c = Client::new("Ivan", " ");
        let err = ClientValidations.validate_new(Some(&c)).unwrap_err();
        assert_eq!(err.info(), r#"surname = " ". must not be blank"#);
    }

    #[test]
    fn new_client_must_not_carry_id() {
        let err = ClientValidations.validate_new(Some(&Client::new("Ivan", "Petrov").with_id(3))).unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Validation);
    }
}
