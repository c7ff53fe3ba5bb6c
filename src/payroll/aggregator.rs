use sqlx::MySqlPool;

use crate::error::{Error, Result};
use crate::model::advance::Advance;
use crate::model::employee::Employee;
use crate::model::leave::Leave;
use crate::model::overtime::Overtime;
use crate::payroll::period::Period;

/// Everything pay-affecting that happened to one employee inside one period.
/// Collections are empty, not errors, for quiet months.
#[derive(Debug, Clone, Default)]
pub struct PeriodTransactions {
    pub overtimes: Vec<Overtime>,
    pub advances: Vec<Advance>,
    pub unpaid_leaves: Vec<Leave>,
}

pub async fn fetch_employee(pool: &MySqlPool, employee_id: u64) -> Result<Employee> {
    let employee = sqlx::query_as::<_, Employee>(
        r#"
        SELECT id, name, mobile, base_salary, pf_percentage, active, created_at, updated_at
        FROM employees
        WHERE id = ?
        "#,
    )
    .bind(employee_id)
    .fetch_optional(pool)
    .await?;

    employee.ok_or(Error::not_found("Employee", employee_id))
}

pub async fn overtimes_in_period(
    pool: &MySqlPool,
    employee_id: u64,
    period: Period,
) -> Result<Vec<Overtime>> {
    let rows = sqlx::query_as::<_, Overtime>(
        r#"
        SELECT id, employee_id, overtime_date, hours, rate_per_hour, total_amount
        FROM overtimes
        WHERE employee_id = ? AND overtime_date BETWEEN ? AND ?
        ORDER BY overtime_date, id
        "#,
    )
    .bind(employee_id)
    .bind(period.first_day())
    .bind(period.last_day())
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn advances_in_period(
    pool: &MySqlPool,
    employee_id: u64,
    period: Period,
) -> Result<Vec<Advance>> {
    let rows = sqlx::query_as::<_, Advance>(
        r#"
        SELECT id, employee_id, advance_date, amount, description
        FROM advances
        WHERE employee_id = ? AND advance_date BETWEEN ? AND ?
        ORDER BY advance_date, id
        "#,
    )
    .bind(employee_id)
    .bind(period.first_day())
    .bind(period.last_day())
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn leaves_in_period(
    pool: &MySqlPool,
    employee_id: u64,
    period: Period,
    unpaid_only: bool,
) -> Result<Vec<Leave>> {
    let sql = if unpaid_only {
        r#"
        SELECT id, employee_id, leave_date, leave_type, description
        FROM leaves
        WHERE employee_id = ? AND leave_date BETWEEN ? AND ? AND leave_type = 'UNPAID'
        ORDER BY leave_date, id
        "#
    } else {
        r#"
        SELECT id, employee_id, leave_date, leave_type, description
        FROM leaves
        WHERE employee_id = ? AND leave_date BETWEEN ? AND ?
        ORDER BY leave_date, id
        "#
    };

    let rows = sqlx::query_as::<_, Leave>(sql)
        .bind(employee_id)
        .bind(period.first_day())
        .bind(period.last_day())
        .fetch_all(pool)
        .await?;

    Ok(rows)
}

/// Pulls the employee and every period transaction with explicit, eager
/// queries. All three listings share the same inclusive first-to-last-day
/// range, so the totals and the ledger are built from identical row sets.
pub async fn aggregate(
    pool: &MySqlPool,
    employee_id: u64,
    period: Period,
) -> Result<(Employee, PeriodTransactions)> {
    let employee = fetch_employee(pool, employee_id).await?;

    let overtimes = overtimes_in_period(pool, employee_id, period).await?;
    let advances = advances_in_period(pool, employee_id, period).await?;
    let unpaid_leaves = leaves_in_period(pool, employee_id, period, true).await?;

    Ok((
        employee,
        PeriodTransactions {
            overtimes,
            advances,
            unpaid_leaves,
        },
    ))
}
