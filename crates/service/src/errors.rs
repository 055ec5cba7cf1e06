use common::ErrorType;
use models::errors::ModelError;
use thiserror::Error;

/// Every failure a service can report. One variant per [`ErrorType`]; the
/// payload is the human-readable info that ends up in the error body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("business rule violated: {0}")]
    Business(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("null argument: {0}")]
    NullArgument(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("accounts service request failed: {0}")]
    BadMksRequest(String),
    #[error("accounts service returned no body: {0}")]
    MksResponseNull(String),
    #[error("accounts service returned an unexpected body: {0}")]
    MksResponseUnknown(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("{0}")]
    Other(String),
}

impl ServiceError {
    pub fn new(kind: ErrorType, info: impl Into<String>) -> Self {
        let info = info.into();
        match kind {
            ErrorType::Business => Self::Business(info),
            ErrorType::Validation => Self::Validation(info),
            ErrorType::NullArgument => Self::NullArgument(info),
            ErrorType::NotFound => Self::NotFound(info),
            ErrorType::BadMksRequest => Self::BadMksRequest(info),
            ErrorType::MksResponseNull => Self::MksResponseNull(info),
            ErrorType::MksResponseUnknown => Self::MksResponseUnknown(info),
            ErrorType::DbError => Self::Db(info),
            ErrorType::Other => Self::Other(info),
        }
    }

    pub fn not_found(entity: &str, id: i64) -> Self {
        Self::NotFound(format!("{} with id = {} not found", entity, id))
    }

    pub fn error_type(&self) -> ErrorType {
        match self {
            Self::Business(_) => ErrorType::Business,
            Self::Validation(_) => ErrorType::Validation,
            Self::NullArgument(_) => ErrorType::NullArgument,
            Self::NotFound(_) => ErrorType::NotFound,
            Self::BadMksRequest(_) => ErrorType::BadMksRequest,
            Self::MksResponseNull(_) => ErrorType::MksResponseNull,
            Self::MksResponseUnknown(_) => ErrorType::MksResponseUnknown,
            Self::Db(_) => ErrorType::DbError,
            Self::Other(_) => ErrorType::Other,
        }
    }

    pub fn info(&self) -> &str {
        match self {
            Self::Business(s)
            | Self::Validation(s)
            | Self::NullArgument(s)
            | Self::NotFound(s)
            | Self::BadMksRequest(s)
            | Self::MksResponseNull(s)
            | Self::MksResponseUnknown(s)
            | Self::Db(s)
            | Self::Other(s) => s,
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::Db(e.to_string())
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => Self::Validation(msg),
            ModelError::Db(msg) => Self::Db(msg),
        }
    }
}
