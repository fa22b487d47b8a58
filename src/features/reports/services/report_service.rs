use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::reports::dtos::{
    AdminReportDto, CreateReportDto, ReportResponseDto, UpdateReportStatusDto,
};
use crate::features::reports::models::{ProjectReport, ReportStatus};
use crate::shared::types::PaginationQuery;

#[derive(Debug, FromRow)]
struct AdminReportRow {
    #[sqlx(flatten)]
    report: ProjectReport,
    project_title: String,
    reporter_email: String,
}

/// Service for flags raised against projects
pub struct ReportService {
    pool: PgPool,
}

impl ReportService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Flag a project. Any authenticated role may report.
    pub async fn create(
        &self,
        actor: &AuthenticatedUser,
        dto: CreateReportDto,
    ) -> Result<ReportResponseDto> {
        let project_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM projects WHERE id = $1)")
                .bind(dto.project_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to check project {}: {:?}", dto.project_id, e);
                    AppError::Database(e)
                })?;

        if !project_exists {
            return Err(AppError::NotFound(format!(
                "Project {} not found",
                dto.project_id
            )));
        }

        let report = sqlx::query_as::<_, ProjectReport>(
            r#"
            INSERT INTO project_reports (reporter_id, project_id, reason)
            VALUES ($1, $2, $3)
            RETURNING id, reporter_id, project_id, reason, status, created_at, updated_at
            "#,
        )
        .bind(actor.user_id)
        .bind(dto.project_id)
        .bind(dto.reason.trim())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create report: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "User {} flagged project {} (report {})",
            actor.user_id,
            report.project_id,
            report.id
        );

        Ok(report.into())
    }

    /// Flags for admin review, newest first
    pub async fn list(
        &self,
        status: Option<ReportStatus>,
        pagination: &PaginationQuery,
    ) -> Result<(Vec<AdminReportDto>, i64)> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM project_reports WHERE ($1::report_status IS NULL OR status = $1)",
        )
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count reports: {:?}", e);
            AppError::Database(e)
        })?;

        let rows = sqlx::query_as::<_, AdminReportRow>(
            r#"
            SELECT
                r.id, r.reporter_id, r.project_id, r.reason, r.status,
                r.created_at, r.updated_at,
                p.title AS project_title,
                u.email AS reporter_email
            FROM project_reports r
            JOIN projects p ON p.id = r.project_id
            JOIN users u ON u.id = r.reporter_id
            WHERE ($1::report_status IS NULL OR r.status = $1)
            ORDER BY r.created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(status)
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list reports: {:?}", e);
            AppError::Database(e)
        })?;

        let items = rows
            .into_iter()
            .map(|row| AdminReportDto {
                report: row.report.into(),
                project_title: row.project_title,
                reporter_email: row.reporter_email,
            })
            .collect();

        Ok((items, total))
    }

    /// Move a flag forward in its workflow (admin only)
    pub async fn update_status(
        &self,
        actor: &AuthenticatedUser,
        id: Uuid,
        dto: UpdateReportStatusDto,
    ) -> Result<ReportResponseDto> {
        if !actor.is_admin() {
            return Err(AppError::Forbidden("Admin access required".to_string()));
        }

        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin transaction: {:?}", e);
            AppError::Database(e)
        })?;

        let current: ReportStatus =
            sqlx::query_scalar("SELECT status FROM project_reports WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to lock report {}: {:?}", id, e);
                    AppError::Database(e)
                })?
                .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))?;

        let next = current.transition_to(dto.status)?;

        let report = sqlx::query_as::<_, ProjectReport>(
            r#"
            UPDATE project_reports
            SET status = $1, updated_at = NOW()
            WHERE id = $2
            RETURNING id, reporter_id, project_id, reason, status, created_at, updated_at
            "#,
        )
        .bind(next)
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update report {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit report status: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Admin {} moved report {} from {} to {}",
            actor.user_id,
            id,
            current,
            next
        );

        Ok(report.into())
    }
}
