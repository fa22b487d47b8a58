use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Headline numbers shown on the landing page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlatformStatsDto {
    pub approved_projects: i64,
    pub entrepreneurs: i64,
    pub investors: i64,
    #[schema(value_type = String, example = "125000.00")]
    pub total_invested: Decimal,
}
