//! User data model.
//!
//! The store enforces the column constraints (email uniqueness, lengths,
//! defaults); these types carry no validation of their own.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A persisted user record.
///
/// Serialises in camelCase to match the wire format of the REST API
/// (`isActive`, `createdAt`, `updatedAt`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Stable identifier, generated by the store on insert.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: Uuid,
    /// Display name (max 100 characters).
    #[schema(example = "Max")]
    pub name: String,
    /// Unique contact email (max 100 characters).
    #[schema(example = "max@example.com")]
    pub email: String,
    /// Age in years, if known.
    #[schema(example = 30)]
    pub age: Option<i32>,
    /// Soft activity flag; new records default to `true`.
    pub is_active: bool,
    /// Set once when the record is inserted.
    pub created_at: DateTime<Utc>,
    /// Refreshed by the store on every update.
    pub updated_at: DateTime<Utc>,
}

/// Field subset accepted when creating a user.
///
/// The store supplies the id and both timestamps; an absent `is_active`
/// defers to the column default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
    pub is_active: Option<bool>,
}

/// Field subset merged onto an existing user.
///
/// Unset fields retain their stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
    pub is_active: Option<bool>,
}
