use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::admin::dtos::*;
use crate::features::users::dtos::UserResponseDto;
use crate::features::users::models::{User, UserRole};
use crate::shared::constants::{ACTIVITY_FEED_LIMIT, ACTIVITY_PER_SOURCE};
use crate::shared::types::PaginationQuery;

#[derive(Debug, FromRow)]
struct StatsRow {
    total_users: i64,
    total_projects: i64,
    pending_projects: i64,
    total_investments: i64,
    total_amount_invested: Decimal,
}

#[derive(Debug, FromRow)]
struct RegistrationRow {
    id: Uuid,
    display_name: String,
    role: UserRole,
    created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct SubmissionRow {
    id: Uuid,
    title: String,
    created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct InvestmentRow {
    id: Uuid,
    investor_name: String,
    project_title: String,
    amount: Decimal,
    created_at: DateTime<Utc>,
}

/// Service for admin console queries
pub struct AdminService {
    pool: PgPool,
}

impl AdminService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    // USERS
    // =========================================================================

    /// List users, newest first, optionally filtered by role
    pub async fn list_users(
        &self,
        role: Option<UserRole>,
        pagination: &PaginationQuery,
    ) -> Result<(Vec<UserResponseDto>, i64)> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM users WHERE ($1::user_role IS NULL OR role = $1)",
        )
        .bind(role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count users: {:?}", e);
            AppError::Database(e)
        })?;

        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, name, role, created_at, updated_at
            FROM users
            WHERE ($1::user_role IS NULL OR role = $1)
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(role)
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list users: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((users.into_iter().map(UserResponseDto::from).collect(), total))
    }

    // =========================================================================
    // STATS
    // =========================================================================

    pub async fn get_stats(&self) -> Result<AdminStatsDto> {
        let row = sqlx::query_as::<_, StatsRow>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM users) AS total_users,
                (SELECT COUNT(*) FROM projects) AS total_projects,
                (SELECT COUNT(*) FROM projects WHERE status = 'pending') AS pending_projects,
                (SELECT COUNT(*) FROM investments) AS total_investments,
                (SELECT COALESCE(SUM(amount), 0) FROM investments) AS total_amount_invested
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load admin stats: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(AdminStatsDto {
            total_users: row.total_users,
            total_projects: row.total_projects,
            total_investments: row.total_investments,
            total_amount_invested: row.total_amount_invested,
            pending_projects: row.pending_projects,
        })
    }

    // =========================================================================
    // ACTIVITY
    // =========================================================================

    /// Most recent registrations, submissions and investments, merged newest first
    pub async fn recent_activity(&self) -> Result<Vec<ActivityEventDto>> {
        let registrations = sqlx::query_as::<_, RegistrationRow>(
            r#"
            SELECT id, COALESCE(name, email) AS display_name, role, created_at
            FROM users
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(ACTIVITY_PER_SOURCE)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load recent registrations: {:?}", e);
            AppError::Database(e)
        })?;

        let submissions = sqlx::query_as::<_, SubmissionRow>(
            "SELECT id, title, created_at FROM projects ORDER BY created_at DESC LIMIT $1",
        )
        .bind(ACTIVITY_PER_SOURCE)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load recent submissions: {:?}", e);
            AppError::Database(e)
        })?;

        let investments = sqlx::query_as::<_, InvestmentRow>(
            r#"
            SELECT
                i.id,
                COALESCE(u.name, u.email) AS investor_name,
                p.title AS project_title,
                i.amount,
                i.created_at
            FROM investments i
            JOIN users u ON u.id = i.investor_id
            JOIN projects p ON p.id = i.project_id
            ORDER BY i.created_at DESC
            LIMIT $1
            "#,
        )
        .bind(ACTIVITY_PER_SOURCE)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load recent investments: {:?}", e);
            AppError::Database(e)
        })?;

        let events = registrations
            .into_iter()
            .map(|r| ActivityEventDto {
                kind: ActivityKind::UserRegistered,
                reference_id: r.id,
                description: format!("{} joined as {}", r.display_name, r.role),
                occurred_at: r.created_at,
            })
            .chain(submissions.into_iter().map(|s| ActivityEventDto {
                kind: ActivityKind::ProjectSubmitted,
                reference_id: s.id,
                description: format!("New project submitted: {}", s.title),
                occurred_at: s.created_at,
            }))
            .chain(investments.into_iter().map(|i| ActivityEventDto {
                kind: ActivityKind::InvestmentMade,
                reference_id: i.id,
                description: format!(
                    "{} invested {} in {}",
                    i.investor_name, i.amount, i.project_title
                ),
                occurred_at: i.created_at,
            }))
            .collect();

        Ok(merge_activity(events))
    }
}

/// Newest first, capped at the feed size
fn merge_activity(mut events: Vec<ActivityEventDto>) -> Vec<ActivityEventDto> {
    events.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
    events.truncate(ACTIVITY_FEED_LIMIT);
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn event(kind: ActivityKind, minutes_ago: i64) -> ActivityEventDto {
        ActivityEventDto {
            kind,
            reference_id: Uuid::new_v4(),
            description: String::new(),
            occurred_at: Utc::now() - Duration::minutes(minutes_ago),
        }
    }

    #[test]
    fn test_merge_orders_newest_first_across_sources() {
        let merged = merge_activity(vec![
            event(ActivityKind::UserRegistered, 30),
            event(ActivityKind::InvestmentMade, 1),
            event(ActivityKind::ProjectSubmitted, 10),
        ]);
        let kinds: Vec<ActivityKind> = merged.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ActivityKind::InvestmentMade,
                ActivityKind::ProjectSubmitted,
                ActivityKind::UserRegistered
            ]
        );
    }

    #[test]
    fn test_merge_caps_feed_length() {
        let events = (0..15)
            .map(|i| event(ActivityKind::UserRegistered, i))
            .collect();
        let merged = merge_activity(events);
        assert_eq!(merged.len(), ACTIVITY_FEED_LIMIT);
        assert!(merged
            .windows(2)
            .all(|w| w[0].occurred_at >= w[1].occurred_at));
    }
}
