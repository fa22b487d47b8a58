use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::reports::models::{ProjectReport, ReportStatus};
use crate::shared::constants::DEFAULT_PAGE_SIZE;
use crate::shared::types::PaginationQuery;

/// Request DTO for flagging a project
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateReportDto {
    pub project_id: Uuid,

    #[validate(
        length(min = 1, max = 2000, message = "Reason must be 1-2000 characters"),
        custom(function = "crate::shared::validation::validate_not_blank")
    )]
    pub reason: String,
}

/// Request DTO for moving a flag along its review workflow
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateReportStatusDto {
    pub status: ReportStatus,
}

/// Query params for the admin flag list
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ReportQueryParams {
    /// Filter by status
    pub status: Option<ReportStatus>,
    /// Page number (1-indexed, default: 1)
    #[param(minimum = 1)]
    pub page: Option<i64>,
    /// Items per page (default: 10, max: 100)
    #[param(minimum = 1, maximum = 100)]
    pub page_size: Option<i64>,
}

impl ReportQueryParams {
    pub fn pagination(&self) -> PaginationQuery {
        PaginationQuery {
            page: self.page.unwrap_or(1),
            page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportResponseDto {
    pub id: Uuid,
    pub reporter_id: Uuid,
    pub project_id: Uuid,
    pub reason: String,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProjectReport> for ReportResponseDto {
    fn from(r: ProjectReport) -> Self {
        Self {
            id: r.id,
            reporter_id: r.reporter_id,
            project_id: r.project_id,
            reason: r.reason,
            status: r.status,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Admin view of a flag with the project title and reporter contact
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminReportDto {
    #[serde(flatten)]
    pub report: ReportResponseDto,
    pub project_title: String,
    pub reporter_email: String,
}
