use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::users::dtos::{ChangePasswordDto, UpdateProfileDto, UserResponseDto};
use crate::features::users::services::UserService;
use crate::shared::types::ApiResponse;
use axum::{extract::State, Json};
use std::sync::Arc;
use validator::Validate;

#[utoipa::path(
    patch,
    path = "/api/users/me",
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated successfully", body = ApiResponse<UserResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "users",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_profile(
    user: AuthenticatedUser,
    State(service): State<Arc<UserService>>,
    AppJson(dto): AppJson<UpdateProfileDto>,
) -> Result<Json<ApiResponse<UserResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let profile = service.update_profile(&user, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(profile),
        Some("Profile updated successfully".to_string()),
        None,
    )))
}

#[utoipa::path(
    put,
    path = "/api/users/me/password",
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed successfully"),
        (status = 400, description = "Validation error or wrong current password"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "users",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn change_password(
    user: AuthenticatedUser,
    State(service): State<Arc<UserService>>,
    AppJson(dto): AppJson<ChangePasswordDto>,
) -> Result<Json<ApiResponse<()>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    service.change_password(&user, dto).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Password changed successfully".to_string()),
        None,
    )))
}
