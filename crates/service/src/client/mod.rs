//! Clients service: a client row plus its accounts kept in the accounts service.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;
pub mod validation;

pub use domain::Client;
pub use service::ClientService;
