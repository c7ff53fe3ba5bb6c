use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Advance {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = 1)]
    pub employee_id: u64,

    #[schema(example = "2024-01-10", value_type = String, format = "date")]
    pub advance_date: NaiveDate,

    #[schema(example = "5000.00", value_type = String)]
    pub amount: Decimal,

    #[schema(example = "Medical emergency", nullable = true)]
    pub description: Option<String>,
}
