use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

/// Only unpaid leave affects pay; paid leave is recorded for history.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum LeaveType {
    Paid,
    Unpaid,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Leave {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = 1)]
    pub employee_id: u64,

    #[schema(example = "2024-01-20", value_type = String, format = "date")]
    pub leave_date: NaiveDate,

    #[schema(example = "UNPAID")]
    pub leave_type: LeaveType,

    #[schema(example = "Personal work", nullable = true)]
    pub description: Option<String>,
}
