//! Error taxonomy shared by both services.
//!
//! `ErrorType` is the stable, wire-visible classification of a failure and
//! `ApiErrorDto` is the JSON body every non-2xx response carries. The clients
//! service decodes the same body when the accounts service rejects a call.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    Business,
    Validation,
    NullArgument,
    NotFound,
    BadMksRequest,
    MksResponseNull,
    MksResponseUnknown,
    DbError,
    Other,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::Business => "business",
            ErrorType::Validation => "validation",
            ErrorType::NullArgument => "null_argument",
            ErrorType::NotFound => "not_found",
            ErrorType::BadMksRequest => "bad_mks_request",
            ErrorType::MksResponseNull => "mks_response_null",
            ErrorType::MksResponseUnknown => "mks_response_unknown",
            ErrorType::DbError => "db_error",
            ErrorType::Other => "other",
        }
    }

    /// HTTP status code a failure of this type is reported with.
    pub fn http_status(&self) -> u16 {
        match self {
            ErrorType::Business => 409,
            ErrorType::Validation | ErrorType::NullArgument => 400,
            ErrorType::NotFound => 404,
            ErrorType::BadMksRequest | ErrorType::MksResponseNull | ErrorType::MksResponseUnknown => 502,
            ErrorType::DbError | ErrorType::Other => 500,
        }
    }
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON error body: `{"status": 404, "errType": "not_found", "message": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorDto {
    pub status: u16,
    pub err_type: String,
    pub message: String,
}

impl ApiErrorDto {
    pub fn new(kind: ErrorType, message: impl Into<String>) -> Self {
        Self { status: kind.http_status(), err_type: kind.as_str().to_string(), message: message.into() }
    }

    /// Parse `err_type` back into the shared taxonomy, if it is one of ours.
    pub fn error_type(&self) -> Option<ErrorType> {
        serde_json::from_value(serde_json::Value::String(self.err_type.clone())).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_match_as_str() {
        let all = [
            ErrorType::Business,
            ErrorType::Validation,
            ErrorType::NullArgument,
            ErrorType::NotFound,
            ErrorType::BadMksRequest,
            ErrorType::MksResponseNull,
            ErrorType::MksResponseUnknown,
            ErrorType::DbError,
            ErrorType::Other,
        ];
        for kind in all {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, serde_json::Value::String(kind.as_str().to_string()));
        }
    }

    #[test]
    fn dto_uses_camel_case_and_status_of_kind() {
        let dto = ApiErrorDto::new(ErrorType::NotFound, "Account with id = 7 not found");
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["status"], 404);
        assert_eq!(json["errType"], "not_found");
        assert_eq!(json["message"], "Account with id = 7 not found");
        assert_eq!(dto.error_type(), Some(ErrorType::NotFound));
    }

    #[test]
    fn foreign_err_type_is_not_classified() {
        let dto = ApiErrorDto { status: 500, err_type: "SomeTypeError".into(), message: "Something is bad".into() };
        assert_eq!(dto.error_type(), None);
    }

    #[test]
    fn mks_failures_are_bad_gateway() {
        assert_eq!(ErrorType::BadMksRequest.http_status(), 502);
        assert_eq!(ErrorType::MksResponseNull.http_status(), 502);
        assert_eq!(ErrorType::Validation.http_status(), 400);
        assert_eq!(ErrorType::DbError.http_status(), 500);
    }
}
