pub mod client;
pub mod queries;

pub use client::GraphQlClient;
pub use queries::{ACCOUNT_QUERY, TRANSACTION_QUERY};
