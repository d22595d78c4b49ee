//! Diesel table definition for the SQLite schema.
//!
//! This declaration must match the descriptor in `entity.rs` exactly: the
//! store creates the table from the descriptor, and Diesel validates
//! queries against this mirror at compile time.

diesel::table! {
    /// Registered users.
    users (id) {
        /// Primary key: UUID v4 stored as text, generated on insert.
        id -> Text,
        /// Display name (max 100 characters).
        name -> Text,
        /// Unique contact email (max 100 characters).
        email -> Text,
        /// Optional age in years.
        age -> Nullable<Integer>,
        /// Soft activity flag; the column default is true.
        is_active -> Bool,
        /// Record creation timestamp.
        created_at -> TimestamptzSqlite,
        /// Last modification timestamp, refreshed on every update.
        updated_at -> TimestamptzSqlite,
    }
}
