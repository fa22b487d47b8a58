use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::investments::models::{Investment, InvestmentStatus};

/// Request DTO for committing funds to a project. The fee is always derived
/// server side.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateInvestmentDto {
    pub project_id: Uuid,

    #[validate(custom(function = "crate::shared::validation::validate_money"))]
    #[schema(value_type = String, example = "1000.00")]
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InvestmentResponseDto {
    pub id: Uuid,
    pub investor_id: Uuid,
    pub project_id: Uuid,
    #[schema(value_type = String, example = "1000.00")]
    pub amount: Decimal,
    #[schema(value_type = String, example = "50.00")]
    pub platform_fee: Decimal,
    pub status: InvestmentStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Investment> for InvestmentResponseDto {
    fn from(i: Investment) -> Self {
        Self {
            id: i.id,
            investor_id: i.investor_id,
            project_id: i.project_id,
            amount: i.amount,
            platform_fee: i.platform_fee,
            status: i.status,
            created_at: i.created_at,
        }
    }
}

/// Portfolio entry: an investment plus the title of the project it funds
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PortfolioInvestmentDto {
    #[serde(flatten)]
    pub investment: InvestmentResponseDto,
    pub project_title: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_amount_must_be_positive() {
        let dto: CreateInvestmentDto = serde_json::from_value(json!({
            "project_id": Uuid::new_v4(),
            "amount": "-10"
        }))
        .unwrap();
        assert!(dto.validate().is_err());

        let zero: CreateInvestmentDto = serde_json::from_value(json!({
            "project_id": Uuid::new_v4(),
            "amount": 0
        }))
        .unwrap();
        assert!(zero.validate().is_err());
    }

    #[test]
    fn test_amount_accepts_numbers_and_strings() {
        let from_number: CreateInvestmentDto = serde_json::from_value(json!({
            "project_id": Uuid::new_v4(),
            "amount": 1000
        }))
        .unwrap();
        assert!(from_number.validate().is_ok());
        assert_eq!(from_number.amount, Decimal::from(1000));

        let from_string: CreateInvestmentDto = serde_json::from_value(json!({
            "project_id": Uuid::new_v4(),
            "amount": "1000.50"
        }))
        .unwrap();
        assert!(from_string.validate().is_ok());
    }
}
