//! Pieces shared by the accounts and clients services: the error taxonomy
//! that travels between them, logging bootstrap and process metrics.

pub mod error;
pub mod metrics;
pub mod types;
pub mod utils;

pub use error::{ApiErrorDto, ErrorType};
