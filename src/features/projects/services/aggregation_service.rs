use crate::core::error::{AppError, Result};
use crate::features::projects::models::ProjectAggregate;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, FromRow)]
struct AggregateRow {
    project_id: Uuid,
    total_amount: Decimal,
    investor_count: i64,
}

/// Reads funding totals straight from `investments`. Nothing is cached; every
/// call sees the investments committed so far, whatever their status.
pub struct AggregationService {
    pool: PgPool,
}

impl AggregationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Totals for one project. Fails with `NotFound` if the project does not exist.
    pub async fn get_project_aggregate(&self, project_id: Uuid) -> Result<ProjectAggregate> {
        sqlx::query_as::<_, ProjectAggregate>(
            r#"
            SELECT
                COALESCE(SUM(i.amount), 0) AS total_amount,
                COUNT(i.id) AS investor_count
            FROM projects p
            LEFT JOIN investments i ON i.project_id = p.id
            WHERE p.id = $1
            GROUP BY p.id
            "#,
        )
        .bind(project_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to aggregate project {}: {:?}", project_id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Project {} not found", project_id)))
    }

    /// Totals for many projects in one query. Every requested id is present in
    /// the result; ids without investments (or unknown ids) map to zero.
    pub async fn list_project_aggregates(
        &self,
        project_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, ProjectAggregate>> {
        if project_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, AggregateRow>(
            r#"
            SELECT
                project_id,
                COALESCE(SUM(amount), 0) AS total_amount,
                COUNT(*) AS investor_count
            FROM investments
            WHERE project_id = ANY($1)
            GROUP BY project_id
            "#,
        )
        .bind(project_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to aggregate projects: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(merge_aggregates(project_ids, rows))
    }
}

fn merge_aggregates(
    project_ids: &[Uuid],
    rows: Vec<AggregateRow>,
) -> HashMap<Uuid, ProjectAggregate> {
    let mut aggregates: HashMap<Uuid, ProjectAggregate> = project_ids
        .iter()
        .map(|id| (*id, ProjectAggregate::default()))
        .collect();

    for row in rows {
        aggregates.insert(
            row.project_id,
            ProjectAggregate {
                total_amount: row.total_amount,
                investor_count: row.investor_count,
            },
        );
    }

    aggregates
}
