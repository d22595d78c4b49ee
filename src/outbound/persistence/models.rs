//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::User;

use super::schema::users;

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct UserRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating new user records.
///
/// `is_active` stays `Option` so an absent value defers to the column
/// default rather than writing an explicit one.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub age: Option<i32>,
    pub is_active: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Changeset struct for merging fields onto existing user records.
///
/// `None` fields are skipped by Diesel, which gives the merge-on-update
/// semantics: unset fields retain their stored values.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserChangeset<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub age: Option<i32>,
    pub is_active: Option<bool>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Convert a stored row into the domain type.
///
/// The id column is free-form text at the store level; a non-UUID value is
/// reported as a conversion failure message for the caller to wrap.
pub(crate) fn row_to_user(row: UserRow) -> Result<User, String> {
    let id = Uuid::parse_str(&row.id)
        .map_err(|err| format!("invalid user id {:?} in store: {err}", row.id))?;
    Ok(User {
        id,
        name: row.name,
        email: row.email,
        age: row.age,
        is_active: row.is_active,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}
