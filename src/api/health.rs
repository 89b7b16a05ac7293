use actix_web::{web, HttpResponse, Responder};
use crate::services::UpstreamClient;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub upstream: String,
    pub timestamp: i64,
}

/// Liveness only; upstream reachability is not probed.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(client: web::Data<UpstreamClient>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        upstream: client.base_url().to_string(),
        timestamp: chrono::Utc::now().timestamp(),
    })
}
