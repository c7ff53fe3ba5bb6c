use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Overtime {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = 1)]
    pub employee_id: u64,

    #[schema(example = "2024-01-15", value_type = String, format = "date")]
    pub overtime_date: NaiveDate,

    #[schema(example = "4.00", value_type = String)]
    pub hours: Decimal,

    #[schema(example = "500.00", value_type = String)]
    pub rate_per_hour: Decimal,

    /// hours x rate_per_hour, fixed at creation time.
    #[schema(example = "2000.00", value_type = String)]
    pub total_amount: Decimal,
}
