use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireInvestor;
use crate::features::investments::dtos::{
    CreateInvestmentDto, InvestmentResponseDto, PortfolioInvestmentDto,
};
use crate::features::investments::services::CommitmentService;
use crate::shared::types::{ApiResponse, Meta};
use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use validator::Validate;

/// Commit funds to an approved project
#[utoipa::path(
    post,
    path = "/api/investments",
    request_body = CreateInvestmentDto,
    responses(
        (status = 201, description = "Investment recorded", body = ApiResponse<InvestmentResponseDto>),
        (status = 400, description = "Invalid amount or below the project minimum"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Investor role required"),
        (status = 404, description = "Project not found"),
        (status = 409, description = "Project not open for investment")
    ),
    tag = "investments",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_investment(
    RequireInvestor(user): RequireInvestor,
    State(service): State<Arc<CommitmentService>>,
    AppJson(dto): AppJson<CreateInvestmentDto>,
) -> Result<(StatusCode, Json<ApiResponse<InvestmentResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let investment = service.commit(&user, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(investment),
            Some("Investment recorded".to_string()),
            None,
        )),
    ))
}

/// Investments made by the calling investor
#[utoipa::path(
    get,
    path = "/api/investments",
    responses(
        (status = 200, description = "Own investments", body = ApiResponse<Vec<PortfolioInvestmentDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Investor role required")
    ),
    tag = "investments",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_my_investments(
    RequireInvestor(user): RequireInvestor,
    State(service): State<Arc<CommitmentService>>,
) -> Result<Json<ApiResponse<Vec<PortfolioInvestmentDto>>>> {
    let investments = service.list_for_investor(&user).await?;
    let total = investments.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(investments),
        None,
        Some(Meta { total }),
    )))
}
