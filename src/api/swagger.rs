use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Service API",
        version = "1.0.0",
        description = "Read-only user directory backed by a paginated upstream REST API.\n\n**Features:**\n- Single user lookup by ID\n- Full user listing aggregated across every upstream page\n- Health monitoring and metrics"
    ),
    paths(
        // Users
        crate::api::users::get_user_by_id,
        crate::api::users::get_all_users,

        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            crate::models::User,
            crate::api::health::HealthResponse,
            crate::api::metrics::MetricsResponse,
        )
    ),
    tags(
        (name = "Users", description = "User lookup endpoints proxied from the upstream directory."),
        (name = "Health", description = "Health check and system metrics endpoints for monitoring service status."),
    )
)]
pub struct ApiDoc;
