use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::users::models::{User, UserRole};

/// Public view of a user account (never exposes the password hash)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponseDto {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponseDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// Request DTO for updating the display name
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileDto {
    #[validate(length(min = 1, max = 128, message = "Name must be 1-128 characters"))]
    pub name: String,
}

/// Request DTO for changing the account password
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ChangePasswordDto {
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,

    #[validate(length(min = 8, message = "New password must be at least 8 characters"))]
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_profile_validation() {
        let valid = UpdateProfileDto {
            name: "Grace Hopper".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty = UpdateProfileDto {
            name: String::new(),
        };
        assert!(empty.validate().is_err());

        let too_long = UpdateProfileDto {
            name: "x".repeat(129),
        };
        assert!(too_long.validate().is_err());
    }

    #[test]
    fn test_change_password_requires_long_new_password() {
        let short = ChangePasswordDto {
            current_password: "old-password".to_string(),
            new_password: "short".to_string(),
        };
        assert!(short.validate().is_err());

        let ok = ChangePasswordDto {
            current_password: "old-password".to_string(),
            new_password: "a-much-longer-one".to_string(),
        };
        assert!(ok.validate().is_ok());
    }
}
