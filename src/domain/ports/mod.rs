//! Ports connecting the domain to outbound adapters.

mod user_repository;

pub use user_repository::{UserRepository, UserRepositoryError};
