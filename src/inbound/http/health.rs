//! Store-aware health endpoint.

use actix_web::{get, web};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::outbound::persistence::Store;

/// Health report returned by `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Overall service status.
    #[schema(example = "ok")]
    pub status: String,
    /// Store connection state: `connected` or `disconnected`.
    #[schema(example = "connected")]
    pub database: String,
    /// ISO-8601 timestamp of the probe, millisecond precision.
    #[schema(example = "2026-08-07T12:00:00.000Z")]
    pub timestamp: String,
}

/// Report service health and the store connection state.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health report", body = HealthResponse)
    ),
    tags = ["meta"],
    operation_id = "healthCheck"
)]
#[get("/health")]
pub async fn health(store: web::Data<Store>) -> web::Json<HealthResponse> {
    let database = if store.is_connected() { "connected" } else { "disconnected" };
    web::Json(HealthResponse {
        status: "ok".to_owned(),
        database: database.to_owned(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
