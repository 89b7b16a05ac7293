use actix_web::{web, HttpResponse};
use crate::api::metrics::{increment_error_count, increment_request_count};
use crate::models::User;
use crate::services::UserDirectory;
use crate::utils::UserFetchError;

/// Maps a directory failure to the HTTP answer. Only the top-level message is
/// returned to the client; the upstream cause goes to the log.
pub fn error_response(err: &UserFetchError) -> HttpResponse {
    increment_error_count();

    match err {
        UserFetchError::User { id, .. } if err.upstream_status() == Some(404) => {
            HttpResponse::NotFound().json(serde_json::json!({
                "success": false,
                "error": format!("User {} not found", id)
            }))
        }
        _ => HttpResponse::InternalServerError().json(serde_json::json!({
            "success": false,
            "error": format!("An error occurred: {}", err)
        })),
    }
}

#[utoipa::path(
    get,
    path = "/api/GetUserById{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "Upstream user identifier")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found upstream"),
        (status = 500, description = "Upstream failure")
    )
)]
pub async fn get_user_by_id(
    path: web::Path<i64>,
    directory: web::Data<dyn UserDirectory>,
) -> HttpResponse {
    increment_request_count();
    let id = path.into_inner();
    log::info!("👤 GET /api/GetUserById{}", id);

    match directory.get_user_by_id(id).await {
        Ok(user) => {
            log::info!("✅ User {} retrieved", user.id);
            HttpResponse::Ok().json(user)
        }
        Err(e) => {
            log::error!("❌ {}: {}", e, e.upstream());
            error_response(&e)
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/GetAllUsers",
    tag = "Users",
    responses(
        (status = 200, description = "Every user, in upstream page order", body = [User]),
        (status = 500, description = "Upstream failure")
    )
)]
pub async fn get_all_users(directory: web::Data<dyn UserDirectory>) -> HttpResponse {
    increment_request_count();
    log::info!("👥 GET /api/GetAllUsers");

    match directory.get_all_users().await {
        Ok(users) => {
            log::info!("✅ Retrieved {} users", users.len());
            HttpResponse::Ok().json(users)
        }
        Err(e) => {
            log::error!("❌ {}: {}", e, e.upstream());
            error_response(&e)
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/GetUserById{id}", web::get().to(get_user_by_id))
        .route("/GetAllUsers", web::get().to(get_all_users));
}
