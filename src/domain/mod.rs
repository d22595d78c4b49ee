//! Domain data models and persistence ports.
//!
//! Types here are transport- and storage-agnostic: the HTTP layer and the
//! SQLite adapter both depend on this module, never the other way round.

pub mod ports;
pub mod user;

pub use self::user::{NewUser, User, UserPatch};
