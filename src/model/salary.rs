use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

/// One generated payroll figure per (employee, month, year).
/// Financial fields are written once by the generator and never updated;
/// only sms_sent / sms_sent_at change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Salary {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = 1)]
    pub employee_id: u64,

    #[schema(example = 1)]
    pub month: u32,

    #[schema(example = 2024)]
    pub year: i32,

    #[schema(example = "30000.00", value_type = String)]
    pub base_salary: Decimal,

    #[schema(example = "2000.00", value_type = String)]
    pub total_overtime: Decimal,

    #[schema(example = "5000.00", value_type = String)]
    pub total_advances: Decimal,

    /// Total deduction for unpaid leave days.
    #[schema(example = "1000.00", value_type = String)]
    pub total_leaves: Decimal,

    #[schema(example = "3000.00", value_type = String)]
    pub pf_deduction: Decimal,

    #[schema(example = "23000.00", value_type = String)]
    pub final_salary: Decimal,

    #[schema(example = false)]
    pub sms_sent: bool,

    #[schema(example = "2024-02-01T09:00:00", value_type = String, format = "date-time", nullable = true)]
    pub sms_sent_at: Option<NaiveDateTime>,

    #[schema(example = "2024-02-01T00:00:00Z", value_type = String, format = "date-time")]
    pub created_at: DateTime<Utc>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum DetailType {
    Overtime,
    Advance,
    Leave,
}

/// Append-only ledger row substantiating a salary's totals. Overtime amounts
/// are positive; advance and leave amounts are negative.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct SalaryDetail {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = 1)]
    pub salary_id: u64,

    #[schema(example = "OVERTIME")]
    pub entry_type: DetailType,

    #[schema(example = "2024-01-15", value_type = String, format = "date")]
    pub entry_date: NaiveDate,

    #[schema(example = "2000.00", value_type = String)]
    pub amount: Decimal,

    #[schema(example = "4.00 hrs @ 500.00/hr", nullable = true)]
    pub description: Option<String>,
}
