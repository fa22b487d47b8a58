use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::AppQuery;
use crate::features::admin::dtos::ReviewQueryParams;
use crate::features::admin::services::ApprovalService;
use crate::features::auth::guards::RequireAdmin;
use crate::features::projects::dtos::{ProjectDetailDto, ProjectDto};
use crate::features::projects::models::ApprovalAction;
use crate::features::projects::services::ProjectService;
use crate::shared::types::{ApiResponse, Meta};

/// Projects awaiting or past review, with funding totals
#[utoipa::path(
    get,
    path = "/api/admin/projects",
    params(ReviewQueryParams),
    responses(
        (status = 200, description = "Projects for review", body = ApiResponse<Vec<ProjectDetailDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_projects_for_review(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<ProjectService>>,
    AppQuery(params): AppQuery<ReviewQueryParams>,
) -> Result<Json<ApiResponse<Vec<ProjectDetailDto>>>> {
    let (items, total) = service
        .list_for_review(params.status, &params.pagination())
        .await?;

    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta { total }),
    )))
}

/// Approve a pending project
#[utoipa::path(
    post,
    path = "/api/admin/projects/{id}/approve",
    params(
        ("id" = Uuid, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project approved", body = ApiResponse<ProjectDto>),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 404, description = "Project not found"),
        (status = 409, description = "Project already decided")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn approve_project(
    RequireAdmin(user): RequireAdmin,
    State(service): State<Arc<ApprovalService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ProjectDto>>> {
    let project = service
        .transition(&user, id, ApprovalAction::Approve)
        .await?;
    Ok(Json(ApiResponse::success(
        Some(project),
        Some("Project approved".to_string()),
        None,
    )))
}

/// Reject a pending project
#[utoipa::path(
    post,
    path = "/api/admin/projects/{id}/reject",
    params(
        ("id" = Uuid, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project rejected", body = ApiResponse<ProjectDto>),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 404, description = "Project not found"),
        (status = 409, description = "Project already decided")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn reject_project(
    RequireAdmin(user): RequireAdmin,
    State(service): State<Arc<ApprovalService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ProjectDto>>> {
    let project = service
        .transition(&user, id, ApprovalAction::Reject)
        .await?;
    Ok(Json(ApiResponse::success(
        Some(project),
        Some("Project rejected".to_string()),
        None,
    )))
}

/// Toggle the featured flag of a project
#[utoipa::path(
    post,
    path = "/api/admin/projects/{id}/feature",
    params(
        ("id" = Uuid, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Featured flag flipped", body = ApiResponse<ProjectDto>),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 404, description = "Project not found")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn toggle_featured(
    RequireAdmin(user): RequireAdmin,
    State(service): State<Arc<ApprovalService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ProjectDto>>> {
    let project = service.toggle_featured(&user, id).await?;
    Ok(Json(ApiResponse::success(Some(project), None, None)))
}
