//! Service layer for the accounts and clients microservices.
//! - Domain objects and their validation live next to the service using them.
//! - Persistence goes through repository traits (sea-orm and in-memory impls).
//! - The clients service reaches the accounts service through `mks`.

pub mod errors;
pub mod validation;
pub mod account;
pub mod client;
pub mod mks;
#[cfg(test)]
pub mod test_support;
