use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::api::tags::ApiTags;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// "healthy" while the process serves requests
    pub status: String,
    /// Current server timestamp (RFC 3339)
    pub timestamp: String,
    /// Crate version
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ReadinessResponse {
    /// "ready" or "not_ready"
    pub status: String,
    /// "up" when the catalog database answered
    pub catalog: String,
}

#[derive(poem_openapi::ApiResponse)]
pub enum ReadinessCheckResponse {
    #[oai(status = 200)]
    Ready(Json<ReadinessResponse>),
    #[oai(status = 503)]
    NotReady(Json<ReadinessResponse>),
}

/// Liveness and readiness probes for the till backend.
pub struct Api {
    pool: PgPool,
}

impl Api {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[OpenApi]
impl Api {
    /// Liveness probe
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }

    /// Readiness probe
    ///
    /// Scans need the catalog, so the service only reports ready when the
    /// catalog database answers a trivial query. Cart sessions are in memory
    /// and always available.
    #[oai(path = "/health/ready", method = "get", tag = "ApiTags::Health")]
    async fn readiness_check(&self) -> ReadinessCheckResponse {
        match sqlx::query("SELECT 1").execute(&self.pool).await {
            Ok(_) => ReadinessCheckResponse::Ready(Json(ReadinessResponse {
                status: "ready".to_string(),
                catalog: "up".to_string(),
            })),
            Err(e) => {
                tracing::warn!(error = %e, "catalog database unreachable");
                ReadinessCheckResponse::NotReady(Json(ReadinessResponse {
                    status: "not_ready".to_string(),
                    catalog: "down".to_string(),
                }))
            }
        }
    }
}
