pub mod errors;
pub mod db;
pub mod account;
pub mod client;

#[cfg(test)]
mod tests;
