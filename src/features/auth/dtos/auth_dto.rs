use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::users::dtos::UserResponseDto;
use crate::features::users::models::UserRole;

/// Request DTO for user registration
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterRequestDto {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    #[validate(length(min = 1, max = 128, message = "Name must be 1-128 characters"))]
    pub name: Option<String>,

    /// `entrepreneur` or `investor`; admin accounts cannot self-register
    pub role: UserRole,
}

/// Request DTO for user login
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequestDto {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Request DTO for token refresh
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RefreshTokenRequestDto {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

/// Response DTO for token refresh
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RefreshTokenResponseDto {
    pub access_token: String,
    /// Token type (always "Bearer")
    pub token_type: String,
    /// Access token expiry in seconds
    pub expires_in: i64,
    /// Rotated refresh token
    pub refresh_token: String,
}

/// Response DTO for authentication (register/login)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthResponseDto {
    pub access_token: String,
    /// Token type (always "Bearer")
    pub token_type: String,
    /// Access token expiry in seconds
    pub expires_in: i64,
    pub refresh_token: String,
    pub user: UserResponseDto,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_validation() {
        let dto: RegisterRequestDto = serde_json::from_value(serde_json::json!({
            "email": "founder@example.com",
            "password": "long-enough",
            "name": "Founder",
            "role": "entrepreneur"
        }))
        .unwrap();
        assert!(dto.validate().is_ok());

        let bad_email = RegisterRequestDto {
            email: "not-an-email".to_string(),
            ..dto
        };
        assert!(bad_email.validate().is_err());
    }

    #[test]
    fn test_register_rejects_unknown_role() {
        let parsed = serde_json::from_value::<RegisterRequestDto>(serde_json::json!({
            "email": "x@example.com",
            "password": "long-enough",
            "role": "superuser"
        }));
        assert!(parsed.is_err());
    }
}
