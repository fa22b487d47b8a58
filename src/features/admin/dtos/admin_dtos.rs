use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::features::projects::models::ProjectStatus;
use crate::features::users::models::UserRole;
use crate::shared::constants::DEFAULT_PAGE_SIZE;
use crate::shared::types::PaginationQuery;

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

// =============================================================================
// PROJECT REVIEW DTOs
// =============================================================================

/// Query params for the project review queue
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ReviewQueryParams {
    /// Filter by review status
    pub status: Option<ProjectStatus>,
    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,
    /// Items per page
    #[serde(default = "default_page_size")]
    #[param(minimum = 1, maximum = 100)]
    pub page_size: i64,
}

impl ReviewQueryParams {
    pub fn pagination(&self) -> PaginationQuery {
        PaginationQuery {
            page: self.page,
            page_size: self.page_size,
        }
    }
}

// =============================================================================
// USER DTOs
// =============================================================================

/// Query params for listing users
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct UserQueryParams {
    /// Filter by role
    pub role: Option<UserRole>,
    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,
    /// Items per page
    #[serde(default = "default_page_size")]
    #[param(minimum = 1, maximum = 100)]
    pub page_size: i64,
}

impl UserQueryParams {
    pub fn pagination(&self) -> PaginationQuery {
        PaginationQuery {
            page: self.page,
            page_size: self.page_size,
        }
    }
}

// =============================================================================
// STATS & ACTIVITY DTOs
// =============================================================================

/// Platform-wide counters for the admin dashboard
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminStatsDto {
    pub total_users: i64,
    pub total_projects: i64,
    pub total_investments: i64,
    #[schema(value_type = String, example = "125000.00")]
    pub total_amount_invested: Decimal,
    pub pending_projects: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    UserRegistered,
    ProjectSubmitted,
    InvestmentMade,
}

/// One entry of the recent activity feed
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ActivityEventDto {
    pub kind: ActivityKind,
    /// Id of the user, project or investment the event refers to
    pub reference_id: Uuid,
    pub description: String,
    pub occurred_at: DateTime<Utc>,
}
