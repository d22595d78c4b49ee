//! Users API handlers.

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::inbound::http::{ApiError, ApiResult};

/// Line item returned by `GET /users`.
///
/// A deliberately smaller shape than the persisted
/// [`User`](crate::domain::User): integer id, name, and email only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserSummary {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Max")]
    pub name: String,
    #[schema(example = "max@example.com")]
    pub email: String,
}

/// List example users.
///
/// The listing is not wired to the user store: it returns the same two
/// example records on every call, whatever the store contains.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Example users", body = [UserSummary]),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users() -> ApiResult<web::Json<Vec<UserSummary>>> {
    let data = vec![
        UserSummary { id: 1, name: "Max".into(), email: "max@example.com".into() },
        UserSummary { id: 2, name: "Maria".into(), email: "maria@example.com".into() },
    ];
    Ok(web::Json(data))
}
