use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::users::models::UserRole;

/// Identity attached to a request once its access token has been verified
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
    pub role: UserRole,
}

impl AuthenticatedUser {
    /// Check if user has a specific role
    pub fn has_role(&self, role: UserRole) -> bool {
        self.role == role
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(UserRole::Admin)
    }

    pub fn is_investor(&self) -> bool {
        self.has_role(UserRole::Investor)
    }

    pub fn is_entrepreneur(&self) -> bool {
        self.has_role(UserRole::Entrepreneur)
    }
}

/// Distinguishes access tokens from refresh tokens inside the JWT
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// JWT claims issued by this service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub role: UserRole,
    pub kind: TokenKind,
    pub iss: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email,
            role: claims.role,
        }
    }
}
