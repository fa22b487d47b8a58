use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::projects::models::{
    MediaType, Project, ProjectAggregate, ProjectMedia, ProjectStatus,
};
use crate::shared::constants::DEFAULT_PAGE_SIZE;
use crate::shared::types::PaginationQuery;

// =============================================================================
// REQUESTS
// =============================================================================

/// Request DTO for submitting a project for review
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProjectDto {
    #[validate(
        length(min = 1, max = 200, message = "Title must be 1-200 characters"),
        custom(function = "crate::shared::validation::validate_not_blank")
    )]
    pub title: String,

    #[validate(
        length(min = 1, max = 10000, message = "Description must be 1-10000 characters"),
        custom(function = "crate::shared::validation::validate_not_blank")
    )]
    pub description: String,

    #[validate(
        length(min = 1, max = 100, message = "Category must be 1-100 characters"),
        custom(function = "crate::shared::validation::validate_not_blank")
    )]
    pub category: String,

    #[validate(custom(function = "crate::shared::validation::validate_money"))]
    #[schema(value_type = String, example = "1000.00")]
    pub minimum_investment: Decimal,

    #[validate(
        length(min = 1, max = 100, message = "Reward type must be 1-100 characters"),
        custom(function = "crate::shared::validation::validate_not_blank")
    )]
    pub reward_type: String,

    #[validate(
        length(min = 1, max = 2000, message = "Reward description must be 1-2000 characters"),
        custom(function = "crate::shared::validation::validate_not_blank")
    )]
    pub reward_description: String,

    /// Ordered images/videos; the first one is the cover
    #[validate(
        length(min = 1, max = 20, message = "Between 1 and 20 media items are required"),
        nested
    )]
    pub media: Vec<CreateProjectMediaDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProjectMediaDto {
    #[serde(rename = "type")]
    pub media_type: MediaType,

    #[validate(
        length(max = 2048, message = "Media URL must not exceed 2048 characters"),
        regex(
            path = "*crate::shared::validation::MEDIA_URL_REGEX",
            message = "Media URL must be an absolute http(s) URL"
        )
    )]
    pub url: String,
}

/// Query parameters for browsing approved projects
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ProjectListQuery {
    /// Exact category match
    pub category: Option<String>,
    /// Exact reward type match
    pub reward_type: Option<String>,
    /// Case-insensitive match on title or description
    pub search: Option<String>,
    /// Page number (1-indexed, default: 1)
    #[param(minimum = 1)]
    pub page: Option<i64>,
    /// Number of items per page (default: 10, max: 100)
    #[param(minimum = 1, maximum = 100)]
    pub page_size: Option<i64>,
}

impl ProjectListQuery {
    pub fn pagination(&self) -> PaginationQuery {
        PaginationQuery {
            page: self.page.unwrap_or(1),
            page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }

    /// `%term%` pattern for ILIKE, ignoring blank input
    pub fn search_pattern(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| format!("%{}%", s))
    }
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct FeaturedQuery {
    /// Number of projects to return (default: 6, max: 100)
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct AggregateIdsQuery {
    /// Comma-separated project IDs
    pub ids: String,
}

// =============================================================================
// RESPONSES
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProjectMediaDto {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub url: String,
    pub position: i32,
}

impl From<ProjectMedia> for ProjectMediaDto {
    fn from(media: ProjectMedia) -> Self {
        Self {
            id: media.id,
            media_type: media.media_type,
            url: media.media_url,
            position: media.position,
        }
    }
}

/// Project fields as stored
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProjectDto {
    pub id: Uuid,
    pub entrepreneur_id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    #[schema(value_type = String, example = "1000.00")]
    pub minimum_investment: Decimal,
    pub reward_type: String,
    pub reward_description: String,
    pub status: ProjectStatus,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Project> for ProjectDto {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            entrepreneur_id: p.entrepreneur_id,
            title: p.title,
            description: p.description,
            category: p.category,
            minimum_investment: p.minimum_investment,
            reward_type: p.reward_type,
            reward_description: p.reward_description,
            status: p.status,
            is_featured: p.is_featured,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// Project with owner name, ordered media and live funding totals
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProjectDetailDto {
    #[serde(flatten)]
    pub project: ProjectDto,
    pub entrepreneur_name: Option<String>,
    pub media: Vec<ProjectMediaDto>,
    pub aggregate: ProjectAggregate,
}

/// Distinct filter values among approved projects
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FilterOptionsDto {
    pub categories: Vec<String>,
    pub reward_types: Vec<String>,
}

/// One entry of a batch aggregate lookup
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProjectAggregateEntryDto {
    pub project_id: Uuid,
    #[schema(value_type = String, example = "1500.00")]
    pub total_amount: Decimal,
    pub investor_count: i64,
}
