//! Role-based authorization guards.
//!
//! These guards extract the authenticated user and verify they hold the
//! required role. Roles are disjoint: an admin is not an investor and cannot
//! invest, an investor cannot submit projects.

use crate::core::error::AppError;
use crate::features::auth::model::AuthenticatedUser;
use axum::{extract::FromRequestParts, http::request::Parts};

fn authenticated(parts: &Parts) -> Result<&AuthenticatedUser, AppError> {
    parts
        .extensions
        .get::<AuthenticatedUser>()
        .ok_or_else(|| AppError::Unauthorized("User not authenticated".to_string()))
}

/// Guard for admin-only endpoints.
///
/// # Example
/// ```ignore
/// pub async fn handler(RequireAdmin(user): RequireAdmin) { ... }
/// ```
pub struct RequireAdmin(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = authenticated(parts)?;

        if !user.is_admin() {
            return Err(AppError::Forbidden("Admin access required".to_string()));
        }

        Ok(RequireAdmin(user.clone()))
    }
}

/// Guard for endpoints reserved to investors.
pub struct RequireInvestor(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireInvestor
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = authenticated(parts)?;

        if !user.is_investor() {
            return Err(AppError::Forbidden(
                "Only investors can make investments".to_string(),
            ));
        }

        Ok(RequireInvestor(user.clone()))
    }
}

/// Guard for endpoints reserved to entrepreneurs.
pub struct RequireEntrepreneur(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireEntrepreneur
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = authenticated(parts)?;

        if !user.is_entrepreneur() {
            return Err(AppError::Forbidden(
                "Only entrepreneurs can manage projects".to_string(),
            ));
        }

        Ok(RequireEntrepreneur(user.clone()))
    }
}
