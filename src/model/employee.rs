use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "name": "John Doe",
        "mobile": "9876543210",
        "base_salary": "30000.00",
        "pf_percentage": "10.00",
        "active": true,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = "John Doe")]
    pub name: String,

    /// 10-digit local mobile number, normalized to international
    /// format only at SMS time.
    #[schema(example = "9876543210")]
    pub mobile: String,

    #[schema(example = "30000.00", value_type = String)]
    pub base_salary: Decimal,

    /// Provident-fund deduction rate, percent of base salary.
    #[schema(example = "10.00", value_type = String)]
    pub pf_percentage: Decimal,

    #[schema(example = true)]
    pub active: bool,

    #[schema(example = "2024-01-01T00:00:00Z", value_type = String, format = "date-time")]
    pub created_at: DateTime<Utc>,

    #[schema(example = "2024-01-01T00:00:00Z", value_type = String, format = "date-time")]
    pub updated_at: DateTime<Utc>,
}
