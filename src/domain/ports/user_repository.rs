//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{NewUser, User, UserPatch};

/// Persistence errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserRepositoryError {
    /// The store connection could not be reached.
    #[error("user store connection failed: {message}")]
    Connection { message: String },

    /// A query or mutation failed during execution.
    #[error("user store query failed: {message}")]
    Query { message: String },

    /// The store rejected a write for violating a column constraint.
    #[error("user store constraint violated: {message}")]
    Constraint { message: String },
}

impl UserRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection { message: message.into() }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query { message: message.into() }
    }

    /// Create a constraint-violation error with the given message.
    pub fn constraint(message: impl Into<String>) -> Self {
        Self::Constraint { message: message.into() }
    }
}

/// Entity-level operations against the user store.
///
/// Every call is a single round trip: no retries, no caching, and absence is
/// reported through `None`/`false` return values rather than errors.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch every user in the store's default order.
    async fn find_all(&self) -> Result<Vec<User>, UserRepositoryError>;

    /// Fetch a user by identifier; `None` when the id is absent.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, UserRepositoryError>;

    /// Fetch a user by the unique email; `None` when no user matches.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError>;

    /// Insert a new record with a store-generated id and timestamps and
    /// return it as saved. Constraint violations (such as a duplicate
    /// email) surface as [`UserRepositoryError::Constraint`].
    async fn create(&self, new_user: NewUser) -> Result<User, UserRepositoryError>;

    /// Merge the supplied fields onto an existing record and return it as
    /// saved, refreshing `updated_at`; `None` when the id is absent.
    async fn update(&self, id: Uuid, patch: UserPatch)
    -> Result<Option<User>, UserRepositoryError>;

    /// Remove a record by id. Returns `true` when a row was deleted and
    /// `false` when the id was absent.
    async fn delete(&self, id: Uuid) -> Result<bool, UserRepositoryError>;

    /// Fetch users whose activity flag is set.
    async fn find_active(&self) -> Result<Vec<User>, UserRepositoryError>;

    /// Fetch users ordered by descending age.
    async fn find_sorted_by_age(&self) -> Result<Vec<User>, UserRepositoryError>;

    /// Fetch one page of users: skip `(page - 1) * limit` rows, return at
    /// most `limit`, in the store's default order. Inputs are passed to the
    /// store unvalidated.
    async fn find_with_pagination(
        &self,
        page: i64,
        limit: i64,
    ) -> Result<Vec<User>, UserRepositoryError>;
}
