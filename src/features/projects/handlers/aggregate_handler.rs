use crate::core::error::{AppError, Result};
use crate::core::extractor::AppQuery;
use crate::features::projects::dtos::{AggregateIdsQuery, ProjectAggregateEntryDto};
use crate::features::projects::models::ProjectAggregate;
use crate::features::projects::services::AggregationService;
use crate::shared::constants::MAX_PAGE_SIZE;
use crate::shared::types::ApiResponse;
use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

/// Funding totals of one project
#[utoipa::path(
    get,
    path = "/api/projects/{id}/aggregate",
    params(
        ("id" = Uuid, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project aggregate", body = ApiResponse<ProjectAggregate>),
        (status = 404, description = "Project not found")
    ),
    tag = "projects"
)]
pub async fn get_project_aggregate(
    State(service): State<Arc<AggregationService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ProjectAggregate>>> {
    let aggregate = service.get_project_aggregate(id).await?;
    Ok(Json(ApiResponse::success(Some(aggregate), None, None)))
}

/// Funding totals of several projects, in the order requested
#[utoipa::path(
    get,
    path = "/api/projects/aggregates",
    params(AggregateIdsQuery),
    responses(
        (status = 200, description = "Aggregates per project", body = ApiResponse<Vec<ProjectAggregateEntryDto>>),
        (status = 400, description = "Malformed id list")
    ),
    tag = "projects"
)]
pub async fn list_project_aggregates(
    State(service): State<Arc<AggregationService>>,
    AppQuery(query): AppQuery<AggregateIdsQuery>,
) -> Result<Json<ApiResponse<Vec<ProjectAggregateEntryDto>>>> {
    let ids = parse_ids(&query.ids)?;
    let aggregates = service.list_project_aggregates(&ids).await?;

    let entries = ids
        .iter()
        .map(|id| {
            let aggregate = aggregates.get(id).copied().unwrap_or_default();
            ProjectAggregateEntryDto {
                project_id: *id,
                total_amount: aggregate.total_amount,
                investor_count: aggregate.investor_count,
            }
        })
        .collect();

    Ok(Json(ApiResponse::success(Some(entries), None, None)))
}

/// Parse a comma-separated id list, dropping duplicates while keeping order
fn parse_ids(raw: &str) -> Result<Vec<Uuid>> {
    let mut ids: Vec<Uuid> = Vec::new();
    for part in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let id = Uuid::parse_str(part)
            .map_err(|_| AppError::BadRequest(format!("Invalid project id: {}", part)))?;
        if !ids.contains(&id) {
            ids.push(id);
        }
    }

    if ids.is_empty() {
        return Err(AppError::Validation(
            "At least one project id is required".to_string(),
        ));
    }
    if ids.len() as i64 > MAX_PAGE_SIZE {
        return Err(AppError::Validation(format!(
            "At most {} project ids can be requested at once",
            MAX_PAGE_SIZE
        )));
    }

    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ids_keeps_order_and_dedupes() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let parsed = parse_ids(&format!("{}, {},{}", a, b, a)).unwrap();
        assert_eq!(parsed, vec![a, b]);
    }

    #[test]
    fn test_parse_ids_rejects_garbage() {
        assert!(matches!(
            parse_ids("not-a-uuid"),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(parse_ids(" , "), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_parse_ids_enforces_batch_limit() {
        let raw = (0..=MAX_PAGE_SIZE)
            .map(|_| Uuid::new_v4().to_string())
            .collect::<Vec<_>>()
            .join(",");
        assert!(matches!(parse_ids(&raw), Err(AppError::Validation(_))));
    }
}
