//! Validation shared by the account and client services.
//!
//! Field constraints are declared with `validator` on the domain types;
//! [`Validations`] layers the null/id rules for create, update and list
//! operations on top and turns the first violation into a [`ServiceError`].

use validator::{ValidationError, ValidationErrors};

use crate::errors::ServiceError;

pub trait Validations<T> {
    /// Item name used in messages, e.g. `"account"`.
    const ITEM: &'static str;
    /// Plural item name used in messages, e.g. `"accounts"`.
    const ITEMS: &'static str;

    /// Field-level constraints of a single item.
    fn validate_item(&self, item: &T) -> Result<(), ServiceError>;

    fn id_of(item: &T) -> Option<i64>;

    fn validate_not_null<'a>(&self, item: Option<&'a T>, message: &str) -> Result<&'a T, ServiceError> {
        item.ok_or_else(|| ServiceError::NullArgument(message.to_string()))
    }

    /// Item about to be created: present, valid, and without an id.
    fn validate_new<'a>(&self, item: Option<&'a T>) -> Result<&'a T, ServiceError> {
        let item = self.validate_not_null(item, &format!("Null {} not allowed", Self::ITEM))?;
        self.validate_item(item)?;
        if let Some(id) = Self::id_of(item) {
            return Err(ServiceError::Validation(format!("New {} must not have an id, got id = {}", Self::ITEM, id)));
        }
        Ok(item)
    }

    /// Item about to be updated: present, valid, and carrying its id.
    fn validate_existing<'a>(&self, item: Option<&'a T>) -> Result<&'a T, ServiceError> {
        let item = self.validate_not_null(item, &format!("Null {} not allowed", Self::ITEM))?;
        self.validate_item(item)?;
        if Self::id_of(item).is_none() {
            return Err(ServiceError::Validation(format!("Existing {} must have an id", Self::ITEM)));
        }
        Ok(item)
    }

    /// Every list element must be present.
    fn validate_list<'a>(&self, items: &'a [Option<T>]) -> Result<Vec<&'a T>, ServiceError> {
        let message = format!("Null {} in {} list not allowed", Self::ITEM, Self::ITEMS);
        items.iter().map(|i| self.validate_not_null(i.as_ref(), &message)).collect()
    }

    fn validate_new_list<'a>(&self, items: &'a [Option<T>]) -> Result<Vec<&'a T>, ServiceError> {
        let items = self.validate_list(items)?;
        for item in &items {
            self.validate_new(Some(*item))?;
        }
        Ok(items)
    }

}

/// JSON name of a struct field: `middle_name` becomes `middleName`.
fn wire_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Rejects strings made only of whitespace.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Report the first field violation as `"<field> = <value>. <message>"`.
///
/// Fields are visited in name order so the reported violation is stable.
pub fn first_violation(errors: &ValidationErrors) -> ServiceError {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    for (field, errs) in fields {
        if let Some(err) = errs.first() {
            let value = err
                .params
                .get("value")
                .map(|v| v.to_string())
                .unwrap_or_else(|| "null".to_string());
            let message = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| err.code.to_string());
            return ServiceError::Validation(format!("{} = {}. {}", wire_name(field), value, message));
        }
    }
    ServiceError::Validation(errors.to_string())
}
