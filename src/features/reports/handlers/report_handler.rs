use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppQuery};
use crate::features::auth::guards::RequireAdmin;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::reports::dtos::{
    AdminReportDto, CreateReportDto, ReportQueryParams, ReportResponseDto, UpdateReportStatusDto,
};
use crate::features::reports::services::ReportService;
use crate::shared::types::{ApiResponse, Meta};

/// Flag a project for admin attention
#[utoipa::path(
    post,
    path = "/api/reports",
    request_body = CreateReportDto,
    responses(
        (status = 201, description = "Report created", body = ApiResponse<ReportResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Project not found")
    ),
    tag = "reports",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_report(
    user: AuthenticatedUser,
    State(service): State<Arc<ReportService>>,
    AppJson(dto): AppJson<CreateReportDto>,
) -> Result<(StatusCode, Json<ApiResponse<ReportResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let report = service.create(&user, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(report),
            Some("Report submitted".to_string()),
            None,
        )),
    ))
}

/// List flags (paginated, optional status filter)
#[utoipa::path(
    get,
    path = "/api/admin/reports",
    params(ReportQueryParams),
    responses(
        (status = 200, description = "List of reports", body = ApiResponse<Vec<AdminReportDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_reports(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<ReportService>>,
    AppQuery(params): AppQuery<ReportQueryParams>,
) -> Result<Json<ApiResponse<Vec<AdminReportDto>>>> {
    let (items, total) = service.list(params.status, &params.pagination()).await?;

    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta { total }),
    )))
}

/// Update the status of a flag
#[utoipa::path(
    patch,
    path = "/api/admin/reports/{id}",
    params(
        ("id" = Uuid, Path, description = "Report ID")
    ),
    request_body = UpdateReportStatusDto,
    responses(
        (status = 200, description = "Report updated", body = ApiResponse<ReportResponseDto>),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 404, description = "Report not found"),
        (status = 409, description = "Transition not allowed")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_report_status(
    RequireAdmin(user): RequireAdmin,
    State(service): State<Arc<ReportService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateReportStatusDto>,
) -> Result<Json<ApiResponse<ReportResponseDto>>> {
    let report = service.update_status(&user, id, dto).await?;
    Ok(Json(ApiResponse::success(Some(report), None, None)))
}
