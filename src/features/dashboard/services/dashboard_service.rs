use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use crate::core::error::{AppError, Result};
use crate::features::dashboard::dtos::*;

#[derive(Debug, FromRow)]
struct StatsRow {
    approved_projects: i64,
    entrepreneurs: i64,
    investors: i64,
    total_invested: Decimal,
}

/// Service for public dashboard queries
pub struct DashboardService {
    pool: PgPool,
}

impl DashboardService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Platform totals in a single round trip
    pub async fn get_stats(&self) -> Result<PlatformStatsDto> {
        let row = sqlx::query_as::<_, StatsRow>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM projects WHERE status = 'approved') AS approved_projects,
                (SELECT COUNT(*) FROM users WHERE role = 'entrepreneur') AS entrepreneurs,
                (SELECT COUNT(*) FROM users WHERE role = 'investor') AS investors,
                (SELECT COALESCE(SUM(amount), 0) FROM investments) AS total_invested
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get platform stats: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(PlatformStatsDto {
            approved_projects: row.approved_projects,
            entrepreneurs: row.entrepreneurs,
            investors: row.investors,
            total_invested: row.total_invested,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::users::models::UserRole;
    use crate::shared::test_helpers::seed_user;

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a running Postgres (DATABASE_URL)"]
    async fn test_stats_count_roles(pool: PgPool) {
        seed_user(&pool, UserRole::Entrepreneur).await;
        seed_user(&pool, UserRole::Investor).await;
        seed_user(&pool, UserRole::Investor).await;
        seed_user(&pool, UserRole::Admin).await;

        let stats = DashboardService::new(pool).get_stats().await.unwrap();
        assert_eq!(stats.entrepreneurs, 1);
        assert_eq!(stats.investors, 2);
        assert_eq!(stats.approved_projects, 0);
        assert_eq!(stats.total_invested, Decimal::ZERO);
    }
}
