//! SQLite persistence adapter using the Diesel ORM.
//!
//! The persistence layer follows these principles:
//!
//! - **Thin adapters**: the repository only translates between Diesel rows
//!   and domain types. No business logic resides here.
//! - **Internal models**: Diesel row structs (`models.rs`), the table
//!   declaration (`schema.rs`), and the DDL descriptors (`entity.rs`) are
//!   implementation details, never exposed to the domain layer.
//! - **One connection**: the whole process shares a single store handle,
//!   opened at startup and closed at shutdown; queries run on the blocking
//!   thread pool.

mod entity;
mod models;
mod schema;
mod sqlite_user_repository;
mod store;

pub use sqlite_user_repository::SqliteUserRepository;
pub use store::{Store, StoreError};
