use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::core::error::{AppError, Result};

/// Project review status matching the `project_status` database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "project_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectStatus::Pending => write!(f, "pending"),
            ProjectStatus::Approved => write!(f, "approved"),
            ProjectStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// Admin decision on a pending project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalAction {
    Approve,
    Reject,
}

impl ProjectStatus {
    /// Resolve the status an approval action leads to.
    ///
    /// Only `pending` projects can be decided; `approved` and `rejected` are terminal.
    pub fn transition(self, action: ApprovalAction) -> Result<ProjectStatus> {
        match (self, action) {
            (ProjectStatus::Pending, ApprovalAction::Approve) => Ok(ProjectStatus::Approved),
            (ProjectStatus::Pending, ApprovalAction::Reject) => Ok(ProjectStatus::Rejected),
            (current, action) => Err(AppError::InvalidState(format!(
                "Cannot {} a project that is already {}",
                match action {
                    ApprovalAction::Approve => "approve",
                    ApprovalAction::Reject => "reject",
                },
                current
            ))),
        }
    }

    /// Only approved projects accept investments
    pub fn accepts_investments(self) -> bool {
        self == ProjectStatus::Approved
    }
}

/// Database model for project
#[derive(Debug, Clone, FromRow)]
pub struct Project {
    pub id: Uuid,
    pub entrepreneur_id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub minimum_investment: Decimal,
    pub reward_type: String,
    pub reward_description: String,
    pub status: ProjectStatus,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_can_be_approved_or_rejected() {
        assert_eq!(
            ProjectStatus::Pending
                .transition(ApprovalAction::Approve)
                .unwrap(),
            ProjectStatus::Approved
        );
        assert_eq!(
            ProjectStatus::Pending
                .transition(ApprovalAction::Reject)
                .unwrap(),
            ProjectStatus::Rejected
        );
    }

    #[test]
    fn test_decided_projects_are_terminal() {
        for status in [ProjectStatus::Approved, ProjectStatus::Rejected] {
            for action in [ApprovalAction::Approve, ApprovalAction::Reject] {
                assert!(matches!(
                    status.transition(action),
                    Err(AppError::InvalidState(_))
                ));
            }
        }
    }

    #[test]
    fn test_only_approved_accepts_investments() {
        assert!(ProjectStatus::Approved.accepts_investments());
        assert!(!ProjectStatus::Pending.accepts_investments());
        assert!(!ProjectStatus::Rejected.accepts_investments());
    }
}
