use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppQuery;
use crate::features::admin::dtos::*;
use crate::features::admin::services::AdminService;
use crate::features::auth::guards::RequireAdmin;
use crate::features::users::dtos::UserResponseDto;
use crate::shared::types::{ApiResponse, Meta};

/// List users (paginated)
#[utoipa::path(
    get,
    path = "/api/admin/users",
    params(UserQueryParams),
    responses(
        (status = 200, description = "List of users", body = ApiResponse<Vec<UserResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_users(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<AdminService>>,
    AppQuery(params): AppQuery<UserQueryParams>,
) -> Result<Json<ApiResponse<Vec<UserResponseDto>>>> {
    let (items, total) = service
        .list_users(params.role, &params.pagination())
        .await?;

    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta { total }),
    )))
}

/// Platform counters
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    responses(
        (status = 200, description = "Admin dashboard stats", body = ApiResponse<AdminStatsDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_stats(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<AdminService>>,
) -> Result<Json<ApiResponse<AdminStatsDto>>> {
    let stats = service.get_stats().await?;
    Ok(Json(ApiResponse::success(Some(stats), None, None)))
}

/// Recent registrations, submissions and investments
#[utoipa::path(
    get,
    path = "/api/admin/activity",
    responses(
        (status = 200, description = "Recent activity, newest first", body = ApiResponse<Vec<ActivityEventDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_activity(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<AdminService>>,
) -> Result<Json<ApiResponse<Vec<ActivityEventDto>>>> {
    let events = service.recent_activity().await?;
    Ok(Json(ApiResponse::success(Some(events), None, None)))
}
