use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Funding totals of one project, computed from investment rows on every read.
///
/// `investor_count` counts investments, not distinct investors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ProjectAggregate {
    #[schema(value_type = String, example = "1500.00")]
    pub total_amount: Decimal,
    pub investor_count: i64,
}
