//! SQLite-backed [`UserRepository`] adapter.
//!
//! Each operation acquires the store connection on the blocking thread
//! pool, runs one Diesel query, and maps the result back into domain
//! types. Store and Diesel failures are translated into
//! [`UserRepositoryError`] variants; absence is never an error.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use uuid::Uuid;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{NewUser, User, UserPatch};

use super::models::{NewUserRow, UserChangeset, UserRow, row_to_user};
use super::schema::users;
use super::store::{Store, StoreError};

/// Diesel-backed repository over the process-wide [`Store`].
#[derive(Clone)]
pub struct SqliteUserRepository {
    store: Store,
}

impl SqliteUserRepository {
    /// Create a repository sharing the given store handle.
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Run a query closure on the blocking pool with the live connection.
    async fn run<T, F>(&self, f: F) -> Result<T, UserRepositoryError>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T, UserRepositoryError> + Send + 'static,
        T: Send + 'static,
    {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || store.with_conn(f))
            .await
            .map_err(|err| UserRepositoryError::query(format!("blocking task aborted: {err}")))?
    }
}

impl From<StoreError> for UserRepositoryError {
    fn from(error: StoreError) -> Self {
        Self::connection(error.to_string())
    }
}

/// Classify Diesel failures into the port's error taxonomy.
fn map_diesel_error(error: diesel::result::Error) -> UserRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info)
        | DieselError::DatabaseError(DatabaseErrorKind::NotNullViolation, info)
        | DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, info) => {
            UserRepositoryError::constraint(info.message().to_owned())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserRepositoryError::connection("store connection closed")
        }
        other => UserRepositoryError::query(other.to_string()),
    }
}

fn collect_users(rows: Vec<UserRow>) -> Result<Vec<User>, UserRepositoryError> {
    rows.into_iter()
        .map(row_to_user)
        .collect::<Result<Vec<_>, _>>()
        .map_err(UserRepositoryError::query)
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, UserRepositoryError> {
        self.run(|conn| {
            let rows: Vec<UserRow> = users::table
                .select(UserRow::as_select())
                .load(conn)
                .map_err(map_diesel_error)?;
            collect_users(rows)
        })
        .await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, UserRepositoryError> {
        self.run(move |conn| {
            let row: Option<UserRow> = users::table
                .find(id.to_string())
                .select(UserRow::as_select())
                .first(conn)
                .optional()
                .map_err(map_diesel_error)?;
            row.map(row_to_user)
                .transpose()
                .map_err(UserRepositoryError::query)
        })
        .await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError> {
        let email = email.to_owned();
        self.run(move |conn| {
            let row: Option<UserRow> = users::table
                .filter(users::email.eq(email))
                .select(UserRow::as_select())
                .first(conn)
                .optional()
                .map_err(map_diesel_error)?;
            row.map(row_to_user)
                .transpose()
                .map_err(UserRepositoryError::query)
        })
        .await
    }

    async fn create(&self, new_user: NewUser) -> Result<User, UserRepositoryError> {
        self.run(move |conn| {
            let id = Uuid::new_v4().to_string();
            let now = Utc::now();
            let row = NewUserRow {
                id: &id,
                name: &new_user.name,
                email: &new_user.email,
                age: new_user.age,
                is_active: new_user.is_active,
                created_at: now,
                updated_at: now,
            };
            let saved: UserRow = diesel::insert_into(users::table)
                .values(&row)
                .returning(UserRow::as_returning())
                .get_result(conn)
                .map_err(map_diesel_error)?;
            row_to_user(saved).map_err(UserRepositoryError::query)
        })
        .await
    }

    async fn update(
        &self,
        id: Uuid,
        patch: UserPatch,
    ) -> Result<Option<User>, UserRepositoryError> {
        self.run(move |conn| {
            let id = id.to_string();
            let existing: Option<String> = users::table
                .find(id.as_str())
                .select(users::id)
                .first(conn)
                .optional()
                .map_err(map_diesel_error)?;
            if existing.is_none() {
                return Ok(None);
            }

            let changeset = UserChangeset {
                name: patch.name.as_deref(),
                email: patch.email.as_deref(),
                age: patch.age,
                is_active: patch.is_active,
                updated_at: Some(Utc::now()),
            };
            let saved: UserRow = diesel::update(users::table.find(id.as_str()))
                .set(&changeset)
                .returning(UserRow::as_returning())
                .get_result(conn)
                .map_err(map_diesel_error)?;
            row_to_user(saved).map(Some).map_err(UserRepositoryError::query)
        })
        .await
    }

    async fn delete(&self, id: Uuid) -> Result<bool, UserRepositoryError> {
        self.run(move |conn| {
            let affected = diesel::delete(users::table.find(id.to_string()))
                .execute(conn)
                .map_err(map_diesel_error)?;
            Ok(affected > 0)
        })
        .await
    }

    async fn find_active(&self) -> Result<Vec<User>, UserRepositoryError> {
        self.run(|conn| {
            let rows: Vec<UserRow> = users::table
                .filter(users::is_active.eq(true))
                .select(UserRow::as_select())
                .load(conn)
                .map_err(map_diesel_error)?;
            collect_users(rows)
        })
        .await
    }

    async fn find_sorted_by_age(&self) -> Result<Vec<User>, UserRepositoryError> {
        self.run(|conn| {
            let rows: Vec<UserRow> = users::table
                .order(users::age.desc())
                .select(UserRow::as_select())
                .load(conn)
                .map_err(map_diesel_error)?;
            collect_users(rows)
        })
        .await
    }

    async fn find_with_pagination(
        &self,
        page: i64,
        limit: i64,
    ) -> Result<Vec<User>, UserRepositoryError> {
        self.run(move |conn| {
            let rows: Vec<UserRow> = users::table
                .select(UserRow::as_select())
                .offset((page - 1) * limit)
                .limit(limit)
                .load(conn)
                .map_err(map_diesel_error)?;
            collect_users(rows)
        })
        .await
    }
}
