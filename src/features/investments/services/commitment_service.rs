use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::investments::dtos::{
    CreateInvestmentDto, InvestmentResponseDto, PortfolioInvestmentDto,
};
use crate::features::investments::models::{Investment, InvestmentStatus};
use crate::features::projects::models::ProjectStatus;
use rust_decimal::{Decimal, RoundingStrategy};
use sqlx::{FromRow, PgPool};

/// Fields of the target project the commitment rules look at
#[derive(Debug, FromRow)]
struct CommitmentTarget {
    status: ProjectStatus,
    minimum_investment: Decimal,
}

#[derive(Debug, FromRow)]
struct PortfolioRow {
    #[sqlx(flatten)]
    investment: Investment,
    project_title: String,
}

/// `amount * percentage / 100`, rounded half away from zero to cents
pub fn calculate_platform_fee(amount: Decimal, fee_percentage: Decimal) -> Decimal {
    (amount * fee_percentage / Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Commitment rules checked against the project as read inside the transaction
fn assess_commitment(target: &CommitmentTarget, amount: Decimal) -> Result<()> {
    if !target.status.accepts_investments() {
        return Err(AppError::InvalidState(format!(
            "Project is {} and not open for investment",
            target.status
        )));
    }
    if amount < target.minimum_investment {
        return Err(AppError::AmountBelowMinimum {
            minimum: target.minimum_investment,
        });
    }
    Ok(())
}

/// Records investor commitments. Payment is simulated: every accepted
/// commitment is stored as `completed` with its platform fee.
pub struct CommitmentService {
    pool: PgPool,
    fee_percentage: Decimal,
}

impl CommitmentService {
    pub fn new(pool: PgPool, fee_percentage: Decimal) -> Self {
        Self {
            pool,
            fee_percentage,
        }
    }

    /// Commit funds to an approved project.
    ///
    /// The project row is re-read inside the transaction; concurrent commits
    /// to the same project each insert their own row.
    pub async fn commit(
        &self,
        actor: &AuthenticatedUser,
        dto: CreateInvestmentDto,
    ) -> Result<InvestmentResponseDto> {
        if !actor.is_investor() {
            return Err(AppError::Forbidden(
                "Only investors can make investments".to_string(),
            ));
        }
        if dto.amount <= Decimal::ZERO {
            return Err(AppError::Validation(
                "Amount must be greater than zero".to_string(),
            ));
        }

        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin transaction: {:?}", e);
            AppError::Database(e)
        })?;

        let target = sqlx::query_as::<_, CommitmentTarget>(
            "SELECT status, minimum_investment FROM projects WHERE id = $1",
        )
        .bind(dto.project_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load project {}: {:?}", dto.project_id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Project {} not found", dto.project_id)))?;

        assess_commitment(&target, dto.amount)?;

        let platform_fee = calculate_platform_fee(dto.amount, self.fee_percentage);

        let investment = sqlx::query_as::<_, Investment>(
            r#"
            INSERT INTO investments (investor_id, project_id, amount, platform_fee, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, investor_id, project_id, amount, platform_fee, status, created_at
            "#,
        )
        .bind(actor.user_id)
        .bind(dto.project_id)
        .bind(dto.amount)
        .bind(platform_fee)
        .bind(InvestmentStatus::Completed)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert investment: {:?}", e);
            AppError::Database(e)
        })?;

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit investment: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Investor {} committed {} to project {} (fee {})",
            actor.user_id,
            investment.amount,
            investment.project_id,
            investment.platform_fee
        );

        Ok(investment.into())
    }

    /// Portfolio of the calling investor, newest first
    pub async fn list_for_investor(
        &self,
        actor: &AuthenticatedUser,
    ) -> Result<Vec<PortfolioInvestmentDto>> {
        if !actor.is_investor() {
            return Err(AppError::Forbidden(
                "Only investors have a portfolio".to_string(),
            ));
        }

        let rows = sqlx::query_as::<_, PortfolioRow>(
            r#"
            SELECT
                i.id, i.investor_id, i.project_id, i.amount, i.platform_fee,
                i.status, i.created_at,
                p.title AS project_title
            FROM investments i
            JOIN projects p ON p.id = i.project_id
            WHERE i.investor_id = $1
            ORDER BY i.created_at DESC
            "#,
        )
        .bind(actor.user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list investments of {}: {:?}", actor.user_id, e);
            AppError::Database(e)
        })?;

        Ok(rows
            .into_iter()
            .map(|row| PortfolioInvestmentDto {
                investment: row.investment.into(),
                project_title: row.project_title,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::admin::services::ApprovalService;
    use crate::features::projects::models::ApprovalAction;
    use crate::features::projects::services::AggregationService;
    use crate::features::users::models::UserRole;
    use crate::shared::test_helpers::{
        admin_user, entrepreneur_user, investor_user, lazy_pool, seed_project, seed_user,
    };
    use tokio_test::{assert_err, assert_ok};
    use uuid::Uuid;

    async fn count_for_project(pool: &PgPool, project_id: Uuid) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM investments WHERE project_id = $1")
            .bind(project_id)
            .fetch_one(pool)
            .await
            .unwrap()
    }

    fn target(status: ProjectStatus, minimum: i64) -> CommitmentTarget {
        CommitmentTarget {
            status,
            minimum_investment: Decimal::from(minimum),
        }
    }

    #[test]
    fn test_fee_is_percentage_of_amount() {
        assert_eq!(
            calculate_platform_fee(Decimal::from(1000), Decimal::from(5)),
            Decimal::new(5000, 2)
        );
        assert_eq!(
            calculate_platform_fee(Decimal::from(500), Decimal::from(5)),
            Decimal::from(25)
        );
        assert_eq!(
            calculate_platform_fee(Decimal::from(1000), Decimal::ZERO),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_fee_rounds_half_away_from_zero() {
        // 10.10 * 2.5% = 0.2525 -> 0.25
        assert_eq!(
            calculate_platform_fee(Decimal::new(1010, 2), Decimal::new(25, 1)),
            Decimal::new(25, 2)
        );
        // 0.50 * 5% = 0.025 -> 0.03
        assert_eq!(
            calculate_platform_fee(Decimal::new(50, 2), Decimal::from(5)),
            Decimal::new(3, 2)
        );
    }

    #[test]
    fn test_assess_accepts_minimum_on_approved_project() {
        assert_ok!(assess_commitment(
            &target(ProjectStatus::Approved, 1000),
            Decimal::from(1000)
        ));
    }

    #[test]
    fn test_assess_rejects_amount_below_minimum() {
        let result = assess_commitment(
            &target(ProjectStatus::Approved, 1000),
            Decimal::new(99999, 2),
        );
        match result {
            Err(AppError::AmountBelowMinimum { minimum }) => {
                assert_eq!(minimum, Decimal::from(1000))
            }
            other => panic!("expected AmountBelowMinimum, got {:?}", other),
        }
    }

    #[test]
    fn test_assess_rejects_projects_not_approved() {
        for status in [ProjectStatus::Pending, ProjectStatus::Rejected] {
            assert!(matches!(
                assess_commitment(&target(status, 1), Decimal::from(5000)),
                Err(AppError::InvalidState(_))
            ));
        }
    }

    #[tokio::test]
    async fn test_non_investor_is_forbidden_before_touching_the_database() {
        let service = CommitmentService::new(lazy_pool(), Decimal::from(5));
        let dto = CreateInvestmentDto {
            project_id: Uuid::new_v4(),
            amount: Decimal::from(1000),
        };

        for actor in [admin_user(), entrepreneur_user()] {
            assert!(matches!(
                service.commit(&actor, dto.clone()).await,
                Err(AppError::Forbidden(_))
            ));
        }
    }

    #[tokio::test]
    async fn test_non_positive_amount_is_rejected() {
        let service = CommitmentService::new(lazy_pool(), Decimal::from(5));
        let dto = CreateInvestmentDto {
            project_id: Uuid::new_v4(),
            amount: Decimal::ZERO,
        };
        assert!(matches!(
            service.commit(&investor_user(), dto).await,
            Err(AppError::Validation(_))
        ));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a running Postgres (DATABASE_URL)"]
    async fn test_commitments_accumulate_in_aggregate(pool: PgPool) {
        let owner = seed_user(&pool, UserRole::Entrepreneur).await;
        let investor = seed_user(&pool, UserRole::Investor).await;
        let admin = seed_user(&pool, UserRole::Admin).await;
        let project_id = seed_project(&pool, &owner, Decimal::from(1000)).await;

        let approvals = ApprovalService::new(pool.clone());
        assert_ok!(
            approvals
                .transition(&admin, project_id, ApprovalAction::Approve)
                .await
        );

        let service = CommitmentService::new(pool.clone(), Decimal::from(5));
        let aggregation = AggregationService::new(pool.clone());

        let first = service
            .commit(
                &investor,
                CreateInvestmentDto {
                    project_id,
                    amount: Decimal::from(1000),
                },
            )
            .await
            .unwrap();
        assert_eq!(first.platform_fee, Decimal::from(50));
        assert_eq!(first.status, InvestmentStatus::Completed);

        let aggregate = aggregation.get_project_aggregate(project_id).await.unwrap();
        assert_eq!(aggregate.total_amount, Decimal::from(1000));
        assert_eq!(aggregate.investor_count, 1);

        service
            .commit(
                &investor,
                CreateInvestmentDto {
                    project_id,
                    amount: Decimal::from(500),
                },
            )
            .await
            .unwrap();

        let aggregate = aggregation.get_project_aggregate(project_id).await.unwrap();
        assert_eq!(aggregate.total_amount, Decimal::from(1500));
        assert_eq!(aggregate.investor_count, 2);

        let portfolio = service.list_for_investor(&investor).await.unwrap();
        assert_eq!(portfolio.len(), 2);
        assert!(portfolio.iter().all(|p| p.project_title == "Seeded project"));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a running Postgres (DATABASE_URL)"]
    async fn test_rejected_commitments_leave_no_rows(pool: PgPool) {
        let owner = seed_user(&pool, UserRole::Entrepreneur).await;
        let investor = seed_user(&pool, UserRole::Investor).await;
        let project_id = seed_project(&pool, &owner, Decimal::from(1000)).await;

        let service = CommitmentService::new(pool.clone(), Decimal::from(5));

        // still pending
        let pending = service
            .commit(
                &investor,
                CreateInvestmentDto {
                    project_id,
                    amount: Decimal::from(5000),
                },
            )
            .await;
        assert!(matches!(pending, Err(AppError::InvalidState(_))));

        let missing = service
            .commit(
                &investor,
                CreateInvestmentDto {
                    project_id: Uuid::new_v4(),
                    amount: Decimal::from(5000),
                },
            )
            .await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));

        let admin = seed_user(&pool, UserRole::Admin).await;
        ApprovalService::new(pool.clone())
            .transition(&admin, project_id, ApprovalAction::Approve)
            .await
            .unwrap();

        let below = service
            .commit(
                &investor,
                CreateInvestmentDto {
                    project_id,
                    amount: Decimal::from(999),
                },
            )
            .await;
        assert_err!(&below);
        assert!(matches!(below, Err(AppError::AmountBelowMinimum { .. })));

        assert_eq!(count_for_project(&pool, project_id).await, 0);
    }
}
