use axum::{extract::State, Json};
use std::sync::Arc;

use crate::core::error::Result;
use crate::features::dashboard::dtos::*;
use crate::features::dashboard::services::DashboardService;
use crate::shared::types::ApiResponse;

/// Public platform statistics
#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Platform statistics", body = ApiResponse<PlatformStatsDto>)
    ),
    tag = "dashboard"
)]
pub async fn get_stats(
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<ApiResponse<PlatformStatsDto>>> {
    let stats = service.get_stats().await?;
    Ok(Json(ApiResponse::success(Some(stats), None, None)))
}
