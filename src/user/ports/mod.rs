//! Port contracts for user lookup and storage.

pub mod repository;

pub use repository::{UserRepository, UserRepositoryError, UserRepositoryResult};
