use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Investment status matching the `investment_status` database enum.
/// Commitments are recorded as `completed` straight away; payment is simulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "investment_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InvestmentStatus {
    Pending,
    Completed,
    Refunded,
}

impl std::fmt::Display for InvestmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvestmentStatus::Pending => write!(f, "pending"),
            InvestmentStatus::Completed => write!(f, "completed"),
            InvestmentStatus::Refunded => write!(f, "refunded"),
        }
    }
}

/// Database model for investment
#[derive(Debug, Clone, FromRow)]
pub struct Investment {
    pub id: Uuid,
    pub investor_id: Uuid,
    pub project_id: Uuid,
    pub amount: Decimal,
    pub platform_fee: Decimal,
    pub status: InvestmentStatus,
    pub created_at: DateTime<Utc>,
}
