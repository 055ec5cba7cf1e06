//! Accounts service: domain, validation, repository and business service.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;
pub mod validation;

pub use domain::Account;
pub use service::AccountService;
