use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::projects::dtos::{
    CreateProjectDto, FilterOptionsDto, ProjectDetailDto, ProjectListQuery, ProjectMediaDto,
};
use crate::features::projects::models::{Project, ProjectMedia, ProjectStatus};
use crate::features::projects::services::AggregationService;
use crate::shared::constants::MAX_PAGE_SIZE;
use crate::shared::types::PaginationQuery;
use sqlx::{FromRow, PgPool};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Project row joined with its owner's display name
#[derive(Debug, FromRow)]
struct ProjectRow {
    #[sqlx(flatten)]
    project: Project,
    entrepreneur_name: Option<String>,
}

const PROJECT_SELECT: &str = r#"
    SELECT
        p.id, p.entrepreneur_id, p.title, p.description, p.category,
        p.minimum_investment, p.reward_type, p.reward_description,
        p.status, p.is_featured, p.created_at, p.updated_at,
        u.name AS entrepreneur_name
    FROM projects p
    JOIN users u ON u.id = p.entrepreneur_id
"#;

/// Service for project submission and the public/owner read paths
pub struct ProjectService {
    pool: PgPool,
    aggregation: Arc<AggregationService>,
    featured_limit: i64,
}

impl ProjectService {
    pub fn new(pool: PgPool, aggregation: Arc<AggregationService>, featured_limit: i64) -> Self {
        Self {
            pool,
            aggregation,
            featured_limit,
        }
    }

    /// Submit a project with its media in one transaction. Starts `pending`, not featured.
    pub async fn create(
        &self,
        actor: &AuthenticatedUser,
        dto: CreateProjectDto,
    ) -> Result<ProjectDetailDto> {
        if !actor.is_entrepreneur() {
            return Err(AppError::Forbidden(
                "Only entrepreneurs can create projects".to_string(),
            ));
        }
        if dto.media.is_empty() {
            return Err(AppError::Validation(
                "At least one media item is required".to_string(),
            ));
        }

        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin transaction: {:?}", e);
            AppError::Database(e)
        })?;

        let project = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (
                entrepreneur_id, title, description, category,
                minimum_investment, reward_type, reward_description
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, entrepreneur_id, title, description, category,
                      minimum_investment, reward_type, reward_description,
                      status, is_featured, created_at, updated_at
            "#,
        )
        .bind(actor.user_id)
        .bind(dto.title.trim())
        .bind(dto.description.trim())
        .bind(dto.category.trim())
        .bind(dto.minimum_investment)
        .bind(dto.reward_type.trim())
        .bind(dto.reward_description.trim())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert project: {:?}", e);
            AppError::Database(e)
        })?;

        let mut media = Vec::with_capacity(dto.media.len());
        for (position, item) in dto.media.iter().enumerate() {
            let row = sqlx::query_as::<_, ProjectMedia>(
                r#"
                INSERT INTO project_media (project_id, media_type, media_url, position)
                VALUES ($1, $2, $3, $4)
                RETURNING id, project_id, media_type, media_url, position, created_at
                "#,
            )
            .bind(project.id)
            .bind(item.media_type)
            .bind(item.url.trim())
            .bind(position as i32)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert project media: {:?}", e);
                AppError::Database(e)
            })?;
            media.push(ProjectMediaDto::from(row));
        }

        let entrepreneur_name: Option<String> =
            sqlx::query_scalar("SELECT name FROM users WHERE id = $1")
                .bind(actor.user_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to load owner of project {}: {:?}", project.id, e);
                    AppError::Database(e)
                })?
                .flatten();

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit project creation: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Project {} submitted by entrepreneur {} with {} media item(s)",
            project.id,
            actor.user_id,
            media.len()
        );

        Ok(ProjectDetailDto {
            project: project.into(),
            entrepreneur_name,
            media,
            aggregate: Default::default(),
        })
    }

    /// Approved projects, featured first then newest, with optional filters
    pub async fn list_approved(
        &self,
        query: &ProjectListQuery,
    ) -> Result<(Vec<ProjectDetailDto>, i64)> {
        let pagination = query.pagination();
        let search = query.search_pattern();

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM projects p
            WHERE p.status = 'approved'
              AND ($1::text IS NULL OR p.category = $1)
              AND ($2::text IS NULL OR p.reward_type = $2)
              AND ($3::text IS NULL OR p.title ILIKE $3 OR p.description ILIKE $3)
            "#,
        )
        .bind(query.category.as_deref())
        .bind(query.reward_type.as_deref())
        .bind(search.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count approved projects: {:?}", e);
            AppError::Database(e)
        })?;

        let sql = format!(
            r#"
            {}
            WHERE p.status = 'approved'
              AND ($1::text IS NULL OR p.category = $1)
              AND ($2::text IS NULL OR p.reward_type = $2)
              AND ($3::text IS NULL OR p.title ILIKE $3 OR p.description ILIKE $3)
            ORDER BY p.is_featured DESC, p.created_at DESC
            LIMIT $4 OFFSET $5
            "#,
            PROJECT_SELECT
        );

        let rows: Vec<ProjectRow> = sqlx::query_as(&sql)
            .bind(query.category.as_deref())
            .bind(query.reward_type.as_deref())
            .bind(search.as_deref())
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list approved projects: {:?}", e);
                AppError::Database(e)
            })?;

        Ok((self.hydrate(rows).await?, total))
    }

    /// Approved and featured projects, newest first
    pub async fn list_featured(&self, limit: Option<i64>) -> Result<Vec<ProjectDetailDto>> {
        let limit = limit.unwrap_or(self.featured_limit);
        let sql = format!(
            r#"
            {}
            WHERE p.status = 'approved' AND p.is_featured = TRUE
            ORDER BY p.created_at DESC
            LIMIT $1
            "#,
            PROJECT_SELECT
        );

        let rows: Vec<ProjectRow> = sqlx::query_as(&sql)
            .bind(limit.clamp(1, MAX_PAGE_SIZE))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list featured projects: {:?}", e);
                AppError::Database(e)
            })?;

        self.hydrate(rows).await
    }

    /// Distinct categories and reward types among approved projects
    pub async fn filter_options(&self) -> Result<FilterOptionsDto> {
        let categories: Vec<String> = sqlx::query_scalar(
            "SELECT DISTINCT category FROM projects WHERE status = 'approved' ORDER BY category",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load category filter options: {:?}", e);
            AppError::Database(e)
        })?;

        let reward_types: Vec<String> = sqlx::query_scalar(
            "SELECT DISTINCT reward_type FROM projects WHERE status = 'approved' ORDER BY reward_type",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load reward type filter options: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(FilterOptionsDto {
            categories,
            reward_types,
        })
    }

    /// Any project by id, whatever its status
    pub async fn get_detail(&self, id: Uuid) -> Result<ProjectDetailDto> {
        let sql = format!("{} WHERE p.id = $1", PROJECT_SELECT);

        let row: ProjectRow = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch project {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Project {} not found", id)))?;

        let mut details = self.hydrate(vec![row]).await?;
        details
            .pop()
            .ok_or_else(|| AppError::Internal(format!("Project {} vanished while loading", id)))
    }

    /// All projects owned by the calling entrepreneur, newest first
    pub async fn list_owned(&self, actor: &AuthenticatedUser) -> Result<Vec<ProjectDetailDto>> {
        if !actor.is_entrepreneur() {
            return Err(AppError::Forbidden(
                "Only entrepreneurs have projects".to_string(),
            ));
        }

        let sql = format!(
            "{} WHERE p.entrepreneur_id = $1 ORDER BY p.created_at DESC",
            PROJECT_SELECT
        );

        let rows: Vec<ProjectRow> = sqlx::query_as(&sql)
            .bind(actor.user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list projects of {}: {:?}", actor.user_id, e);
                AppError::Database(e)
            })?;

        self.hydrate(rows).await
    }

    /// Review queue for admins, optionally filtered by status, newest first
    pub async fn list_for_review(
        &self,
        status: Option<ProjectStatus>,
        pagination: &PaginationQuery,
    ) -> Result<(Vec<ProjectDetailDto>, i64)> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM projects WHERE ($1::project_status IS NULL OR status = $1)",
        )
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count projects for review: {:?}", e);
            AppError::Database(e)
        })?;

        let sql = format!(
            r#"
            {}
            WHERE ($1::project_status IS NULL OR p.status = $1)
            ORDER BY p.created_at DESC
            LIMIT $2 OFFSET $3
            "#,
            PROJECT_SELECT
        );

        let rows: Vec<ProjectRow> = sqlx::query_as(&sql)
            .bind(status)
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list projects for review: {:?}", e);
                AppError::Database(e)
            })?;

        Ok((self.hydrate(rows).await?, total))
    }

    /// Attach media and aggregates to a page of rows with one query each
    async fn hydrate(&self, rows: Vec<ProjectRow>) -> Result<Vec<ProjectDetailDto>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = rows.iter().map(|r| r.project.id).collect();

        let media_rows = sqlx::query_as::<_, ProjectMedia>(
            r#"
            SELECT id, project_id, media_type, media_url, position, created_at
            FROM project_media
            WHERE project_id = ANY($1)
            ORDER BY project_id, position
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load project media: {:?}", e);
            AppError::Database(e)
        })?;

        let mut media_by_project: HashMap<Uuid, Vec<ProjectMediaDto>> = HashMap::new();
        for media in media_rows {
            media_by_project
                .entry(media.project_id)
                .or_default()
                .push(media.into());
        }

        let aggregates = self.aggregation.list_project_aggregates(&ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let id = row.project.id;
                ProjectDetailDto {
                    project: row.project.into(),
                    entrepreneur_name: row.entrepreneur_name,
                    media: media_by_project.remove(&id).unwrap_or_default(),
                    aggregate: aggregates.get(&id).copied().unwrap_or_default(),
                }
            })
            .collect())
    }
}
