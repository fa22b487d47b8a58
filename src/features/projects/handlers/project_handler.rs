use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppQuery};
use crate::features::auth::guards::RequireEntrepreneur;
use crate::features::projects::dtos::{
    CreateProjectDto, FeaturedQuery, FilterOptionsDto, ProjectDetailDto, ProjectListQuery,
};
use crate::features::projects::services::ProjectService;
use crate::shared::types::{ApiResponse, Meta};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

/// Browse approved projects (featured first)
#[utoipa::path(
    get,
    path = "/api/projects",
    params(ProjectListQuery),
    responses(
        (status = 200, description = "Approved projects", body = ApiResponse<Vec<ProjectDetailDto>>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "projects"
)]
pub async fn list_projects(
    State(service): State<Arc<ProjectService>>,
    AppQuery(query): AppQuery<ProjectListQuery>,
) -> Result<Json<ApiResponse<Vec<ProjectDetailDto>>>> {
    let (projects, total) = service.list_approved(&query).await?;
    Ok(Json(ApiResponse::success(
        Some(projects),
        None,
        Some(Meta { total }),
    )))
}

/// Featured approved projects
#[utoipa::path(
    get,
    path = "/api/projects/featured",
    params(FeaturedQuery),
    responses(
        (status = 200, description = "Featured projects", body = ApiResponse<Vec<ProjectDetailDto>>)
    ),
    tag = "projects"
)]
pub async fn list_featured_projects(
    State(service): State<Arc<ProjectService>>,
    AppQuery(query): AppQuery<FeaturedQuery>,
) -> Result<Json<ApiResponse<Vec<ProjectDetailDto>>>> {
    let projects = service.list_featured(query.limit).await?;
    Ok(Json(ApiResponse::success(Some(projects), None, None)))
}

/// Distinct categories and reward types for the browse filters
#[utoipa::path(
    get,
    path = "/api/projects/filter-options",
    responses(
        (status = 200, description = "Filter options", body = ApiResponse<FilterOptionsDto>)
    ),
    tag = "projects"
)]
pub async fn get_filter_options(
    State(service): State<Arc<ProjectService>>,
) -> Result<Json<ApiResponse<FilterOptionsDto>>> {
    let options = service.filter_options().await?;
    Ok(Json(ApiResponse::success(Some(options), None, None)))
}

/// Project detail with media and funding totals
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    params(
        ("id" = Uuid, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project detail", body = ApiResponse<ProjectDetailDto>),
        (status = 404, description = "Project not found")
    ),
    tag = "projects"
)]
pub async fn get_project(
    State(service): State<Arc<ProjectService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ProjectDetailDto>>> {
    let project = service.get_detail(id).await?;
    Ok(Json(ApiResponse::success(Some(project), None, None)))
}

/// Projects owned by the calling entrepreneur
#[utoipa::path(
    get,
    path = "/api/my/projects",
    responses(
        (status = 200, description = "Own projects", body = ApiResponse<Vec<ProjectDetailDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Entrepreneur role required")
    ),
    tag = "projects",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_my_projects(
    RequireEntrepreneur(user): RequireEntrepreneur,
    State(service): State<Arc<ProjectService>>,
) -> Result<Json<ApiResponse<Vec<ProjectDetailDto>>>> {
    let projects = service.list_owned(&user).await?;
    let total = projects.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(projects),
        None,
        Some(Meta { total }),
    )))
}

/// Submit a new project for admin review
#[utoipa::path(
    post,
    path = "/api/my/projects",
    request_body = CreateProjectDto,
    responses(
        (status = 201, description = "Project submitted", body = ApiResponse<ProjectDetailDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Entrepreneur role required")
    ),
    tag = "projects",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_project(
    RequireEntrepreneur(user): RequireEntrepreneur,
    State(service): State<Arc<ProjectService>>,
    AppJson(dto): AppJson<CreateProjectDto>,
) -> Result<(StatusCode, Json<ApiResponse<ProjectDetailDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let project = service.create(&user, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(project),
            Some("Project submitted for review".to_string()),
            None,
        )),
    ))
}
