use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::projects::dtos::ProjectDto;
use crate::features::projects::models::{ApprovalAction, Project, ProjectStatus};
use sqlx::PgPool;
use uuid::Uuid;

const PROJECT_COLUMNS: &str = r#"
    id, entrepreneur_id, title, description, category,
    minimum_investment, reward_type, reward_description,
    status, is_featured, created_at, updated_at
"#;

/// Admin decisions on projects: approve, reject and the featured flag.
/// Investments are never touched here.
pub struct ApprovalService {
    pool: PgPool,
}

impl ApprovalService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn ensure_admin(actor: &AuthenticatedUser) -> Result<()> {
        if !actor.is_admin() {
            return Err(AppError::Forbidden("Admin access required".to_string()));
        }
        Ok(())
    }

    /// Move a pending project to approved or rejected.
    ///
    /// The row is locked for the duration of the transaction so two admins
    /// deciding the same project cannot both succeed.
    pub async fn transition(
        &self,
        actor: &AuthenticatedUser,
        project_id: Uuid,
        action: ApprovalAction,
    ) -> Result<ProjectDto> {
        Self::ensure_admin(actor)?;

        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin transaction: {:?}", e);
            AppError::Database(e)
        })?;

        let current: ProjectStatus =
            sqlx::query_scalar("SELECT status FROM projects WHERE id = $1 FOR UPDATE")
                .bind(project_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to lock project {}: {:?}", project_id, e);
                    AppError::Database(e)
                })?
                .ok_or_else(|| AppError::NotFound(format!("Project {} not found", project_id)))?;

        let next = current.transition(action)?;

        let sql = format!(
            "UPDATE projects SET status = $1, updated_at = NOW() WHERE id = $2 RETURNING {}",
            PROJECT_COLUMNS
        );
        let project: Project = sqlx::query_as(&sql)
            .bind(next)
            .bind(project_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update status of {}: {:?}", project_id, e);
                AppError::Database(e)
            })?;

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit status change: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Admin {} moved project {} from {} to {}",
            actor.user_id,
            project_id,
            current,
            next
        );

        Ok(project.into())
    }

    /// Flip the featured flag, whatever the project's status
    pub async fn toggle_featured(
        &self,
        actor: &AuthenticatedUser,
        project_id: Uuid,
    ) -> Result<ProjectDto> {
        Self::ensure_admin(actor)?;

        let sql = format!(
            r#"
            UPDATE projects
            SET is_featured = NOT is_featured, updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            PROJECT_COLUMNS
        );

        let project: Project = sqlx::query_as(&sql)
            .bind(project_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to toggle featured on {}: {:?}", project_id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Project {} not found", project_id)))?;

        tracing::info!(
            "Admin {} set featured={} on project {}",
            actor.user_id,
            project.is_featured,
            project_id
        );

        Ok(project.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::users::models::UserRole;
    use crate::shared::test_helpers::{
        entrepreneur_user, investor_user, lazy_pool, seed_project, seed_user,
    };
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_non_admin_cannot_decide() {
        let service = ApprovalService::new(lazy_pool());
        for actor in [investor_user(), entrepreneur_user()] {
            assert!(matches!(
                service
                    .transition(&actor, Uuid::new_v4(), ApprovalAction::Approve)
                    .await,
                Err(AppError::Forbidden(_))
            ));
            assert!(matches!(
                service.toggle_featured(&actor, Uuid::new_v4()).await,
                Err(AppError::Forbidden(_))
            ));
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a running Postgres (DATABASE_URL)"]
    async fn test_forbidden_transition_leaves_status_unchanged(pool: PgPool) {
        let owner = seed_user(&pool, UserRole::Entrepreneur).await;
        let investor = seed_user(&pool, UserRole::Investor).await;
        let project_id = seed_project(&pool, &owner, Decimal::from(100)).await;

        let service = ApprovalService::new(pool.clone());
        let result = service
            .transition(&investor, project_id, ApprovalAction::Approve)
            .await;
        assert!(matches!(result, Err(AppError::Forbidden(_))));

        let status: ProjectStatus =
            sqlx::query_scalar("SELECT status FROM projects WHERE id = $1")
                .bind(project_id)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(status, ProjectStatus::Pending);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a running Postgres (DATABASE_URL)"]
    async fn test_decisions_are_terminal_and_featured_toggles(pool: PgPool) {
        let owner = seed_user(&pool, UserRole::Entrepreneur).await;
        let admin = seed_user(&pool, UserRole::Admin).await;
        let project_id = seed_project(&pool, &owner, Decimal::from(100)).await;

        let service = ApprovalService::new(pool.clone());
        let rejected = service
            .transition(&admin, project_id, ApprovalAction::Reject)
            .await
            .unwrap();
        assert_eq!(rejected.status, ProjectStatus::Rejected);

        let again = service
            .transition(&admin, project_id, ApprovalAction::Approve)
            .await;
        assert!(matches!(again, Err(AppError::InvalidState(_))));

        let featured = service.toggle_featured(&admin, project_id).await.unwrap();
        assert!(featured.is_featured);
        let unfeatured = service.toggle_featured(&admin, project_id).await.unwrap();
        assert!(!unfeatured.is_featured);

        let missing = service
            .transition(&admin, Uuid::new_v4(), ApprovalAction::Approve)
            .await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }
}
