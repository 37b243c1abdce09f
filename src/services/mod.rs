// Service exports
pub mod postgres;

pub use postgres::{PostgresClient, PostgresError, StoredGeneration};
