//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API. It
//! registers the documented paths (users list, greeting, health check),
//! the response schemas, and the persisted [`User`] entity shape. The
//! generated document backs Swagger UI at `/docs` and can be exported with
//! `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::domain::User;
use crate::inbound::http::error::ApiError;
use crate::inbound::http::health::HealthResponse;
use crate::inbound::http::users::UserSummary;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User service API",
        description = "Minimal REST interface exposing the user resource and operational probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::greeting::index,
        crate::inbound::http::health::health,
    ),
    components(schemas(UserSummary, HealthResponse, ApiError, User)),
    tags(
        (name = "users", description = "Operations related to users"),
        (name = "meta", description = "Operational endpoints")
    )
)]
pub struct ApiDoc;
