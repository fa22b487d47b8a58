use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Account role matching the `user_role` database enum. Fixed at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Entrepreneur,
    Investor,
    Admin,
}

impl UserRole {
    /// Roles a visitor may pick when registering
    pub fn is_self_registrable(&self) -> bool {
        matches!(self, UserRole::Entrepreneur | UserRole::Investor)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Entrepreneur => write!(f, "entrepreneur"),
            UserRole::Investor => write!(f, "investor"),
            UserRole::Admin => write!(f, "admin"),
        }
    }
}

/// Database model for user accounts
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub name: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_entrepreneurs_and_investors_self_register() {
        assert!(UserRole::Entrepreneur.is_self_registrable());
        assert!(UserRole::Investor.is_self_registrable());
        assert!(!UserRole::Admin.is_self_registrable());
    }

    #[test]
    fn test_role_serde_matches_database_labels() {
        assert_eq!(
            serde_json::to_string(&UserRole::Entrepreneur).unwrap(),
            "\"entrepreneur\""
        );
        let role: UserRole = serde_json::from_str("\"investor\"").unwrap();
        assert_eq!(role, UserRole::Investor);
        assert_eq!(UserRole::Admin.to_string(), "admin");
    }
}
