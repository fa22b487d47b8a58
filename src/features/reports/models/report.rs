use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::core::error::{AppError, Result};

/// Report status enum matching the `report_status` database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "report_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Pending,
    Reviewed,
    Resolved,
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportStatus::Pending => write!(f, "pending"),
            ReportStatus::Reviewed => write!(f, "reviewed"),
            ReportStatus::Resolved => write!(f, "resolved"),
        }
    }
}

impl ReportStatus {
    /// Flags only move forward; `resolved` is terminal.
    pub fn transition_to(self, next: ReportStatus) -> Result<ReportStatus> {
        match (self, next) {
            (ReportStatus::Pending, ReportStatus::Reviewed)
            | (ReportStatus::Pending, ReportStatus::Resolved)
            | (ReportStatus::Reviewed, ReportStatus::Resolved) => Ok(next),
            (current, next) => Err(AppError::InvalidState(format!(
                "Cannot move a {} report to {}",
                current, next
            ))),
        }
    }
}

/// Database model for a flag raised against a project
#[derive(Debug, Clone, FromRow)]
pub struct ProjectReport {
    pub id: Uuid,
    pub reporter_id: Uuid,
    pub project_id: Uuid,
    pub reason: String,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_transitions_are_allowed() {
        assert_eq!(
            ReportStatus::Pending
                .transition_to(ReportStatus::Reviewed)
                .unwrap(),
            ReportStatus::Reviewed
        );
        assert_eq!(
            ReportStatus::Pending
                .transition_to(ReportStatus::Resolved)
                .unwrap(),
            ReportStatus::Resolved
        );
        assert_eq!(
            ReportStatus::Reviewed
                .transition_to(ReportStatus::Resolved)
                .unwrap(),
            ReportStatus::Resolved
        );
    }

    #[test]
    fn test_backward_and_repeated_transitions_fail() {
        let invalid = [
            (ReportStatus::Reviewed, ReportStatus::Pending),
            (ReportStatus::Resolved, ReportStatus::Pending),
            (ReportStatus::Resolved, ReportStatus::Reviewed),
            (ReportStatus::Pending, ReportStatus::Pending),
            (ReportStatus::Resolved, ReportStatus::Resolved),
        ];
        for (from, to) in invalid {
            assert!(matches!(
                from.transition_to(to),
                Err(AppError::InvalidState(_))
            ));
        }
    }
}
